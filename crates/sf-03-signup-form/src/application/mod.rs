//! # Application Layer

pub mod form;

pub use form::SignupForm;
