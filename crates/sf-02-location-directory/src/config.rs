//! # Directory Configuration
//!
//! Endpoint, credentials and retry policies for the remote directory.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

use crate::domain::{RetryPolicy, CITIES_RETRY, STATES_RETRY, TOKEN_RETRY};

/// Country whose states are listed.
pub const DEFAULT_COUNTRY: &str = "United States";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No base URL configured.
    #[error("Directory base URL is not set (SF_DIRECTORY_BASE_URL)")]
    MissingBaseUrl,

    /// Base URL is not http(s).
    #[error("Directory base URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),
}

/// Remote directory configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Service base URL, without trailing slash.
    pub base_url: String,
    /// Value of the `api-token` header on the token request.
    pub api_token: String,
    /// Value of the `user-email` header on the token request.
    pub user_email: String,
    /// Country passed to the states endpoint.
    pub country: String,
    /// Retry policy for the token request.
    pub token_retry: RetryPolicy,
    /// Retry policy for the states request.
    pub states_retry: RetryPolicy,
    /// Retry policy for cities requests.
    pub cities_retry: RetryPolicy,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_token: String::new(),
            user_email: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            token_retry: TOKEN_RETRY,
            states_retry: STATES_RETRY,
            cities_retry: CITIES_RETRY,
        }
    }
}

impl DirectoryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SF_DIRECTORY_BASE_URL`: service base URL (required)
    /// - `SF_DIRECTORY_API_TOKEN`: API token for the token endpoint
    /// - `SF_DIRECTORY_USER_EMAIL`: account email for the token endpoint
    /// - `SF_DIRECTORY_COUNTRY`: country to list states for (default: United States)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("SF_DIRECTORY_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_default(),
            api_token: env::var("SF_DIRECTORY_API_TOKEN").unwrap_or_default(),
            user_email: env::var("SF_DIRECTORY_USER_EMAIL").unwrap_or_default(),
            country: env::var("SF_DIRECTORY_COUNTRY").unwrap_or(defaults.country),
            ..defaults
        }
    }

    /// Create a config for testing: fixed base URL, no retry delays.
    pub fn for_testing() -> Self {
        Self {
            base_url: "http://directory.test/api".to_string(),
            api_token: "test-api-token".to_string(),
            user_email: "tester@example.com".to_string(),
            token_retry: RetryPolicy::new(TOKEN_RETRY.retries, 0),
            states_retry: RetryPolicy::new(STATES_RETRY.retries, 0),
            cities_retry: RetryPolicy::new(CITIES_RETRY.retries, 0),
            ..Self::default()
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }
}
