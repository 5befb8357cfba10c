//! # Ports Module
//!
//! Outbound dependencies of the location directory: HTTP transport and
//! durable key-value storage.

pub mod outbound;

pub use outbound::*;
