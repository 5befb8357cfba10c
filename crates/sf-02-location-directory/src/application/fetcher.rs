//! # Retrying Fetch Executor
//!
//! Runs a [`RequestDescriptor`] against an [`HttpTransport`], retrying
//! transport and status failures with a fixed delay. A body that fails to
//! decode is terminal: the request itself succeeded, so repeating it would
//! not help.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{FetchError, RequestDescriptor, TransportError};
use crate::ports::HttpTransport;

/// Retrying executor over a transport.
pub struct RetryingFetcher<T: HttpTransport> {
    transport: T,
}

impl<T: HttpTransport> RetryingFetcher<T> {
    /// Create an executor.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Perform the request and decode the JSON body.
    ///
    /// Makes at most `retries + 1` attempts, sleeping `retry_delay_ms`
    /// between them. Retries never overlap.
    pub async fn execute<R: DeserializeOwned>(
        &self,
        request: &RequestDescriptor,
    ) -> Result<R, FetchError> {
        let body = self.fetch_body(request).await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Payload {
            url: request.url.clone(),
            reason: e.to_string(),
        })
    }

    async fn fetch_body(&self, request: &RequestDescriptor) -> Result<Vec<u8>, FetchError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.attempt(request).await {
                Ok(body) => {
                    debug!("[sf-02] GET {} succeeded on attempt {}", request.url, attempt);
                    return Ok(body);
                }
                Err(e) if attempt <= request.retry.retries => {
                    warn!(
                        url = %request.url,
                        attempt,
                        max_attempts = request.retry.max_attempts(),
                        error = %e,
                        "[sf-02] Directory request failed, retrying"
                    );
                    tokio::time::sleep(request.retry.delay()).await;
                }
                Err(e) => {
                    return Err(FetchError::Exhausted {
                        url: request.url.clone(),
                        attempts: attempt,
                        last: e,
                    });
                }
            }
        }
    }

    async fn attempt(&self, request: &RequestDescriptor) -> Result<Vec<u8>, TransportError> {
        let response = self.transport.get(&request.url, &request.headers).await?;
        if !response.is_success() {
            return Err(TransportError::Status(response.status));
        }
        Ok(response.body)
    }
}
