//! # Adapters
//!
//! Production implementations of the outbound ports.

pub mod file_storage;
pub mod reqwest_transport;

pub use file_storage::FileStorage;
pub use reqwest_transport::ReqwestTransport;
