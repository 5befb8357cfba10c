//! # SF-02 Location Directory
//!
//! Token-gated state and city lookups against a remote directory service.
//!
//! **Subsystem ID:** 02  
//! **Architecture:** Hexagonal (ports & adapters)
//!
//! ## Purpose
//!
//! - Build request descriptors for the token, states and cities endpoints
//! - Execute them with fixed-count, fixed-delay retries
//! - Cache the results for one form session and persist the auth token
//!
//! ## Request Flow
//!
//! ```text
//! LocationSession ──► RemoteDirectory ──► RequestDescriptor
//!        │                                      │
//!        └──────────► RetryingFetcher ◄─────────┘
//!                           │
//!                     HttpTransport (reqwest / mock)
//! ```
//!
//! The token must be present before states or cities are requested. Nothing
//! queues behind it: a call made without a token is a no-op.
//!
//! ## Module Structure
//!
//! ```text
//! sf-02-location-directory/
//! ├── domain/        # State, City, CityCache, RetryPolicy, wire records, errors
//! ├── ports/         # HttpTransport, DurableStorage (+ test doubles)
//! ├── application/   # RemoteDirectory, RetryingFetcher, LocationSession
//! ├── adapters/      # ReqwestTransport, FileStorage
//! └── config.rs      # DirectoryConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{FileStorage, ReqwestTransport};
pub use application::{
    cities_error_message, LocationSession, RemoteDirectory, RetryingFetcher, AUTH_TOKEN_KEY,
    STATES_ERROR_MESSAGE, TOKEN_ERROR_MESSAGE,
};
pub use config::{ConfigError, DirectoryConfig, DEFAULT_COUNTRY};
pub use domain::{
    City, CityCache, FetchError, RequestDescriptor, ResourceStatus, RetryPolicy, State,
    StorageError, TransportError, CITIES_RETRY, STATES_RETRY, TOKEN_RETRY,
};
pub use ports::{DurableStorage, HttpResponse, HttpTransport, InMemoryStorage, MockTransport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
