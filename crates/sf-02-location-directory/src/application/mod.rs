//! # Application Layer
//!
//! Request building, the retrying executor and the session store.

pub mod directory;
pub mod fetcher;
pub mod session;

pub use directory::RemoteDirectory;
pub use fetcher::RetryingFetcher;
pub use session::{
    cities_error_message, LocationSession, AUTH_TOKEN_KEY, STATES_ERROR_MESSAGE,
    TOKEN_ERROR_MESSAGE,
};
