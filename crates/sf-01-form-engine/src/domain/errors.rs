//! # Domain Errors
//!
//! Validation failures are plain values stored on a field, never errors.
//! `FormError` only covers misuse of the engine API.

use thiserror::Error;

/// Form engine error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The key is not declared in the form schema.
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}
