//! # Domain Module
//!
//! Signup field keys, the city rule, submitted values and view models.

pub mod errors;
pub mod fields;
pub mod values;
pub mod views;

pub use errors::*;
pub use fields::*;
pub use values::*;
pub use views::*;
