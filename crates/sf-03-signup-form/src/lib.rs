//! # SF-03 Signup Form
//!
//! The signup form: six fields, a state/city pair backed by the location
//! directory, and render-ready view models.
//!
//! **Subsystem ID:** 03  
//! **Architecture:** Composition of SF-01 and SF-02
//!
//! ## Fields
//!
//! | Key         | Validators                         |
//! |-------------|------------------------------------|
//! | `firstName` | required                           |
//! | `lastName`  | required                           |
//! | `state`     | required                           |
//! | `city`      | required unless state has no cities|
//! | `email`     | required, email format             |
//! | `password`  | required                           |
//!
//! ## Event Flow
//!
//! ```text
//! select_state(s) ──► set state + validate
//!                 ──► clear city
//!                 ──► LocationSession::fetch_cities_for_state(s)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! sf-03-signup-form/
//! ├── domain/        # field keys, schema, SignupValues, view models, errors
//! └── application/   # SignupForm
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod domain;

// Re-exports
pub use application::SignupForm;
pub use domain::{
    signup_schema, validate_city_based_on_state, DropdownView, SignupError, SignupValues,
    TextInputView, CITY, EMAIL, FIELD_KEYS, FIRST_NAME, LAST_NAME, PASSWORD, STATE,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
