//! # Validators
//!
//! A validator is a pure function of the candidate value, the full form
//! snapshot and a read-only context supplied by the form owner at call
//! time. It returns a message on failure; `None` or an empty message means
//! the value is accepted.
//!
//! Validators are plain `fn` pointers, so they cannot capture mutable
//! state. Anything a rule depends on beyond the form itself (for example a
//! lookup cache) travels through the context parameter.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::FormState;

/// Validator signature: `(candidate, full form state, context) -> message`.
pub type ValidatorFn<C> = fn(&str, &FormState, &C) -> Option<String>;

/// Message for an empty required field.
pub const REQUIRED_MESSAGE: &str = "Required";

/// Message for an empty email field.
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";

/// Message for a malformed email address.
pub const EMAIL_INVALID_MESSAGE: &str = "Email format is invalid";

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").expect("static email pattern");
}

/// Reject empty values.
pub fn validate_required(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(REQUIRED_MESSAGE.to_string());
    }
    None
}

/// Require a value and check it looks like an email address.
pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(EMAIL_REQUIRED_MESSAGE.to_string());
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some(EMAIL_INVALID_MESSAGE.to_string());
    }
    None
}

/// [`validate_required`] as a schema validator for any context.
pub fn required<C>(value: &str, _form: &FormState, _ctx: &C) -> Option<String> {
    validate_required(value)
}

/// [`validate_email`] as a schema validator for any context.
pub fn email<C>(value: &str, _form: &FormState, _ctx: &C) -> Option<String> {
    validate_email(value)
}

/// Normalise a validator result: an empty message counts as a pass.
pub(crate) fn failure_message(result: Option<String>) -> Option<String> {
    result.filter(|msg| !msg.is_empty())
}
