//! # Request Descriptors
//!
//! Immutable description of one directory call: where to go, what headers
//! to send and how hard to retry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Fixed retry count plus fixed delay between attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Additional attempts after the first one.
    pub retries: u32,
    /// Wait between attempts, in milliseconds.
    pub retry_delay_ms: u64,
}

impl RetryPolicy {
    /// Create a policy.
    pub const fn new(retries: u32, retry_delay_ms: u64) -> Self {
        Self {
            retries,
            retry_delay_ms,
        }
    }

    /// Wait between attempts.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Total attempts allowed.
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

/// Retry policy for the token request.
pub const TOKEN_RETRY: RetryPolicy = RetryPolicy::new(3, 1000);

/// Retry policy for the states request.
pub const STATES_RETRY: RetryPolicy = RetryPolicy::new(3, 1000);

/// Retry policy for a cities request.
pub const CITIES_RETRY: RetryPolicy = RetryPolicy::new(3, 2000);

/// One GET request against the directory service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Absolute URL.
    pub url: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Retry behaviour for this call.
    pub retry: RetryPolicy,
}

impl RequestDescriptor {
    /// Create a descriptor with no headers.
    pub fn new(url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            retry,
        }
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
