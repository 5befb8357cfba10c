//! # Domain Errors
//!
//! Transport failures are retried; payload failures are not. Both end up
//! as a `FetchError` once the retry budget is spent.

use thiserror::Error;

/// Failure of a single HTTP attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (connect, DNS, reset...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Unexpected response status: {0}")]
    Status(u16),
}

/// Terminal failure of a directory call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Every attempt failed at the transport level.
    #[error("Request to {url} failed after {attempts} attempts: {last}")]
    Exhausted {
        /// Requested URL
        url: String,
        /// Total attempts made (retries + 1)
        attempts: u32,
        /// Failure of the final attempt
        last: TransportError,
    },

    /// The response arrived but its body could not be decoded.
    #[error("Malformed response from {url}: {reason}")]
    Payload {
        /// Requested URL
        url: String,
        /// Decoder message
        reason: String,
    },
}

/// Durable storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file exists but is not valid.
    #[error("Storage file is corrupt: {0}")]
    Corrupt(String),

    /// Backend refused the write.
    #[error("Storage write rejected: {0}")]
    WriteRejected(String),
}
