//! # Domain Module
//!
//! Core types for the Form Engine: fields, schema, form state and errors.

pub mod errors;
pub mod field;
pub mod schema;
pub mod state;

pub use errors::*;
pub use field::*;
pub use schema::*;
pub use state::*;
