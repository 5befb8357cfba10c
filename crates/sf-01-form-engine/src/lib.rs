//! # SF-01 Form Engine
//!
//! Generic keyed form state with per-field validators.
//!
//! **Subsystem ID:** 01  
//! **Architecture:** Domain types + engine, no I/O
//!
//! ## Purpose
//!
//! Hold the value and validation message of every field in a form and run
//! ordered validators against the current form snapshot:
//! - `set_value` / `clear_error` mutate without validating
//! - `validate` short-circuits on the first failing validator of a field
//! - `validate_form` evaluates every field so all errors surface together
//!
//! Validators receive a caller-supplied context `C` in addition to the form
//! snapshot, which is how cross-field rules consult external read-only data
//! (such as a lookup cache) without the engine holding shared state.
//!
//! ## Module Structure
//!
//! ```text
//! sf-01-form-engine/
//! ├── domain/        # Field, FieldSpec, FormSchema, FormState, FormError
//! ├── validators.rs  # ValidatorFn, required/email rules
//! └── engine.rs      # FormEngine
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod engine;
pub mod validators;

// Re-exports
pub use domain::{Field, FieldSpec, FormError, FormSchema, FormState};
pub use engine::FormEngine;
pub use validators::{
    email, required, validate_email, validate_required, ValidatorFn, EMAIL_INVALID_MESSAGE,
    EMAIL_REQUIRED_MESSAGE, REQUIRED_MESSAGE,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
