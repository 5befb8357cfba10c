//! # View Models
//!
//! Render-ready descriptions of the signup inputs. They carry no behaviour;
//! events go back through [`crate::SignupForm`].

use serde::Serialize;

/// Placeholder while options are loading.
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Placeholder when there is nothing to choose.
pub const EMPTY_PLACEHOLDER: &str = "N/A";

/// A select input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DropdownView {
    /// Field label.
    pub label: String,
    /// Choices in display order.
    pub options: Vec<String>,
    /// Current selection, empty when none.
    pub value: String,
    /// Message shown under the input.
    pub error: Option<String>,
    /// Input does not accept changes.
    pub disabled: bool,
    /// Options are being fetched.
    pub loading: bool,
}

impl DropdownView {
    /// Text of the unselected entry.
    pub fn placeholder(&self) -> String {
        if self.loading {
            LOADING_PLACEHOLDER.to_string()
        } else if !self.options.is_empty() {
            format!("Select {}", self.label)
        } else {
            EMPTY_PLACEHOLDER.to_string()
        }
    }

    /// True when the placeholder entry is shown greyed out.
    pub fn placeholder_selected(&self) -> bool {
        self.options.is_empty() && !self.loading
    }
}

/// A free-text input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextInputView {
    /// Field label.
    pub label: String,
    /// Example text.
    pub placeholder: String,
    /// Current value.
    pub value: String,
    /// Message shown under the input.
    pub error: Option<String>,
    /// Render as a password input.
    pub masked: bool,
}
