//! # Field
//!
//! One editable unit of form data.

use serde::{Deserialize, Serialize};

/// State of a single form input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Current raw value.
    pub value: String,
    /// Current validation message, if any.
    pub error: Option<String>,
}

impl Field {
    /// Create a field holding `value` with no error.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    /// True when no validation message is attached.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}
