//! # Outbound Ports
//!
//! Capabilities the host environment must provide, plus in-memory
//! implementations used by tests and demos.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::domain::{StorageError, TransportError};

/// Raw HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Undecoded body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 response with a JSON body.
    pub fn json(value: &serde_json::Value) -> Self {
        Self::new(200, value.to_string())
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport - outbound port.
///
/// Performs a single GET; retrying is the caller's job.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET with the given headers.
    async fn get(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
    ) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
    ) -> Result<HttpResponse, TransportError> {
        (**self).get(url, headers).await
    }
}

/// Durable key-value storage - outbound port.
///
/// Survives process restarts. Only the auth token is stored here.
pub trait DurableStorage: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: DurableStorage + ?Sized> DurableStorage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// A request seen by [`MockTransport`].
#[derive(Clone, Debug)]
pub struct RecordedCall {
    /// Requested URL.
    pub url: String,
    /// Headers sent.
    pub headers: BTreeMap<String, String>,
    /// When the call started (tokio clock, so paused-time tests see it).
    pub at: Instant,
}

type Reply = Result<HttpResponse, TransportError>;

#[derive(Default)]
struct MockRoutes {
    queued: HashMap<String, VecDeque<Reply>>,
    standing: HashMap<String, Reply>,
    calls: Vec<RecordedCall>,
    latency: Duration,
}

/// Scripted transport for testing.
///
/// Replies are keyed by exact URL. One-shot replies are consumed first,
/// then the standing reply; unrouted URLs answer 404. Clones share state,
/// so a test can keep a handle after moving one into a session.
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<MockRoutes>>,
}

impl MockTransport {
    /// Create a transport with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every reply by `latency`.
    pub fn with_latency(self, latency: Duration) -> Self {
        self.routes.lock().latency = latency;
        self
    }

    /// Answer every request for `url` with `reply`.
    pub fn respond(&self, url: impl Into<String>, reply: Reply) {
        self.routes.lock().standing.insert(url.into(), reply);
    }

    /// Answer the next request for `url` with `reply`.
    pub fn respond_once(&self, url: impl Into<String>, reply: Reply) {
        self.routes
            .lock()
            .queued
            .entry(url.into())
            .or_default()
            .push_back(reply);
    }

    /// Answer every request for `url` with a 200 JSON body.
    pub fn respond_json(&self, url: impl Into<String>, body: serde_json::Value) {
        self.respond(url, Ok(HttpResponse::json(&body)));
    }

    /// Fail every request for `url` at the network level.
    pub fn fail(&self, url: impl Into<String>) {
        self.respond(url, Err(TransportError::Network("mock failure".to_string())));
    }

    /// All requests seen so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.routes.lock().calls.clone()
    }

    /// Number of requests seen for `url`.
    pub fn call_count(&self, url: &str) -> usize {
        self.routes
            .lock()
            .calls
            .iter()
            .filter(|c| c.url == url)
            .count()
    }

    /// Total requests seen.
    pub fn total_calls(&self) -> usize {
        self.routes.lock().calls.len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
    ) -> Result<HttpResponse, TransportError> {
        let (reply, latency) = {
            let mut routes = self.routes.lock();
            routes.calls.push(RecordedCall {
                url: url.to_string(),
                headers: headers.clone(),
                at: Instant::now(),
            });
            let queued = routes.queued.get_mut(url).and_then(VecDeque::pop_front);
            let reply = queued
                .or_else(|| routes.standing.get(url).cloned())
                .unwrap_or(Err(TransportError::Status(404)));
            (reply, routes.latency)
        };

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        reply
    }
}

/// In-memory durable storage for testing.
///
/// Clones share the same map, which stands in for "the same disk" across
/// session reinitialisations.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    values: Arc<RwLock<HashMap<String, String>>>,
    reject_writes: Arc<RwLock<bool>>,
}

impl InMemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.values.write().insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every subsequent write fail.
    pub fn reject_writes(&self, reject: bool) {
        *self.reject_writes.write() = reject;
    }
}

impl DurableStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.reject_writes.read() {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
