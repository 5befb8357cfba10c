//! # Domain Module
//!
//! Core types for the location directory: locations, the city cache,
//! request descriptors, wire records and errors.

pub mod entities;
pub mod errors;
pub mod request;
pub mod wire;

pub use entities::*;
pub use errors::*;
pub use request::*;
pub use wire::*;
