//! # Signup Errors

use sf_01_form_engine::FormError;
use thiserror::Error;

/// Signup form errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// Underlying form engine error.
    #[error(transparent)]
    Form(#[from] FormError),

    /// Submission rejected; the listed fields carry errors.
    #[error("Form has {} invalid field(s): {}", .fields.len(), .fields.join(", "))]
    Invalid {
        /// Keys of the fields that failed validation, in form order
        fields: Vec<String>,
    },
}
