//! # Location Session Store
//!
//! Owns the auth token, the states list and the per-state city cache for
//! one form lifetime. Every resource is fetched lazily and at most once per
//! success; a call made while the same resource is already being fetched
//! returns immediately instead of issuing a second request.
//!
//! ## Status model
//!
//! Each resource has its own [`ResourceStatus`]. On top of that the session
//! exposes a coarse `loading` flag (true while any fetch is in flight) and a
//! single `error` string where the most recent failure wins.

use parking_lot::{RwLock, RwLockWriteGuard};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::application::directory::RemoteDirectory;
use crate::application::fetcher::RetryingFetcher;
use crate::config::DirectoryConfig;
use crate::domain::{
    unique_cities, City, CityCache, CityRecord, ResourceStatus, State, StateRecord,
    TokenResponse,
};
use crate::ports::{DurableStorage, HttpTransport};

/// Durable storage key of the auth token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Session error after a failed token request.
pub const TOKEN_ERROR_MESSAGE: &str = "Error fetching authentication token.";

/// Session error after a failed states request.
pub const STATES_ERROR_MESSAGE: &str = "Error fetching available states.";

/// Session error after a failed cities request.
pub fn cities_error_message(state_name: &str) -> String {
    format!("Error fetching cities for state {}.", state_name)
}

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    token_status: ResourceStatus,
    states: Vec<State>,
    states_status: ResourceStatus,
    cities: CityCache,
    cities_status: HashMap<String, ResourceStatus>,
    in_flight: usize,
    error: Option<String>,
}

/// A lazily fetched resource of the session.
#[derive(Debug)]
enum Resource {
    Token,
    States,
    Cities(String),
}

impl SessionState {
    fn status(&self, resource: &Resource) -> ResourceStatus {
        match resource {
            Resource::Token => self.token_status,
            Resource::States => self.states_status,
            Resource::Cities(name) => self.cities_status.get(name).copied().unwrap_or_default(),
        }
    }

    fn set_status(&mut self, resource: &Resource, status: ResourceStatus) {
        match resource {
            Resource::Token => self.token_status = status,
            Resource::States => self.states_status = status,
            Resource::Cities(name) => {
                self.cities_status.insert(name.clone(), status);
            }
        }
    }
}

/// Marks one fetch as in flight for as long as it lives.
///
/// A fetch settles through [`FetchGuard::settle`]. If the owning future is
/// dropped first, `Drop` releases the in-flight count and returns the
/// resource from `Fetching` to `Absent` so a later call fetches it again.
struct FetchGuard<'a> {
    lock: &'a RwLock<SessionState>,
    resource: Resource,
    settled: bool,
}

impl<'a> FetchGuard<'a> {
    fn start(
        state: &mut SessionState,
        lock: &'a RwLock<SessionState>,
        resource: Resource,
    ) -> Self {
        state.set_status(&resource, ResourceStatus::Fetching);
        state.in_flight += 1;
        Self {
            lock,
            resource,
            settled: false,
        }
    }

    /// Record the outcome and hand back the locked state for the payload.
    fn settle(
        mut self,
        status: ResourceStatus,
        failure: Option<String>,
    ) -> RwLockWriteGuard<'a, SessionState> {
        let lock = self.lock;
        let mut state = lock.write();
        state.set_status(&self.resource, status);
        state.in_flight = state.in_flight.saturating_sub(1);
        if failure.is_some() {
            state.error = failure;
        }
        self.settled = true;
        state
    }
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.lock.write();
        state.in_flight = state.in_flight.saturating_sub(1);
        if state.status(&self.resource) == ResourceStatus::Fetching {
            state.set_status(&self.resource, ResourceStatus::Absent);
        }
        debug!(resource = ?self.resource, "[sf-02] Fetch abandoned before completion");
    }
}

/// Session-scoped location store.
///
/// Methods take `&self`; share the session behind an `Arc` between the
/// form and anything else that needs the cache.
///
/// [`DurableStorage`] is synchronous and is called inline from
/// `ensure_token`, so storage backends must be quick to write.
pub struct LocationSession<T: HttpTransport, S: DurableStorage> {
    id: Uuid,
    directory: RemoteDirectory,
    fetcher: RetryingFetcher<T>,
    storage: S,
    state: RwLock<SessionState>,
}

impl<T: HttpTransport, S: DurableStorage> LocationSession<T, S> {
    /// Create a session, picking up a token persisted by an earlier one.
    pub fn new(config: DirectoryConfig, transport: T, storage: S) -> Self {
        let id = Uuid::new_v4();
        let mut state = SessionState::default();

        match storage.get(AUTH_TOKEN_KEY) {
            Ok(Some(token)) => {
                debug!(session = %id, "[sf-02] Reusing persisted auth token");
                state.token = Some(token);
                state.token_status = ResourceStatus::Present;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(session = %id, error = %e, "[sf-02] Could not read persisted auth token");
            }
        }

        Self {
            id,
            directory: RemoteDirectory::new(config),
            fetcher: RetryingFetcher::new(transport),
            storage,
            state: RwLock::new(state),
        }
    }

    /// Correlation ID for log lines.
    pub fn session_id(&self) -> Uuid {
        self.id
    }

    /// Fetch the auth token unless it is present or already being fetched.
    pub async fn ensure_token(&self) {
        let guard = {
            let mut state = self.state.write();
            if state.token.is_some() || state.token_status == ResourceStatus::Fetching {
                debug!(session = %self.id, "[sf-02] ensure_token: nothing to do");
                return;
            }
            FetchGuard::start(&mut state, &self.state, Resource::Token)
        };

        let request = self.directory.token_request();
        let result = self.fetcher.execute::<TokenResponse>(&request).await;

        let token = match result {
            Ok(response) => response.auth_token,
            Err(e) => {
                error!(session = %self.id, error = %e, "[sf-02] Token request failed");
                drop(guard.settle(ResourceStatus::Failed, Some(TOKEN_ERROR_MESSAGE.to_string())));
                return;
            }
        };

        if let Err(e) = self.storage.set(AUTH_TOKEN_KEY, &token) {
            warn!(session = %self.id, error = %e, "[sf-02] Could not persist auth token");
        }

        let mut state = guard.settle(ResourceStatus::Present, None);
        state.token = Some(token);
        info!(session = %self.id, "[sf-02] Auth token acquired");
    }

    /// Fetch the states list once a token is available.
    pub async fn ensure_states(&self) {
        let (token, guard) = {
            let mut state = self.state.write();
            let Some(token) = state.token.clone() else {
                debug!(session = %self.id, "[sf-02] ensure_states: no token yet");
                return;
            };
            if !state.states.is_empty() || state.states_status == ResourceStatus::Fetching {
                debug!(session = %self.id, "[sf-02] ensure_states: nothing to do");
                return;
            }
            (token, FetchGuard::start(&mut state, &self.state, Resource::States))
        };

        let request = self.directory.states_request(&token);
        let result = self.fetcher.execute::<Vec<StateRecord>>(&request).await;

        match result {
            Ok(records) => {
                let mut state = guard.settle(ResourceStatus::Present, None);
                state.states = records.into_iter().map(State::from).collect();
                info!(session = %self.id, count = state.states.len(), "[sf-02] States loaded");
            }
            Err(e) => {
                error!(session = %self.id, error = %e, "[sf-02] States request failed");
                drop(guard.settle(ResourceStatus::Failed, Some(STATES_ERROR_MESSAGE.to_string())));
            }
        }
    }

    /// Fetch and cache the cities of one state.
    ///
    /// A cached entry is never refetched, even when it is empty.
    pub async fn fetch_cities_for_state(&self, state_name: &str) {
        let (token, guard) = {
            let mut state = self.state.write();
            let Some(token) = state.token.clone() else {
                debug!(session = %self.id, state = state_name, "[sf-02] fetch_cities: no token yet");
                return;
            };
            let in_flight = state.cities_status.get(state_name) == Some(&ResourceStatus::Fetching);
            if state.cities.contains(state_name) || in_flight {
                debug!(session = %self.id, state = state_name, "[sf-02] fetch_cities: nothing to do");
                return;
            }
            let resource = Resource::Cities(state_name.to_string());
            (token, FetchGuard::start(&mut state, &self.state, resource))
        };

        let request = self.directory.cities_request(state_name, &token);
        let result = self.fetcher.execute::<Vec<CityRecord>>(&request).await;

        match result {
            Ok(records) => {
                let cities = unique_cities(records.into_iter().map(|r| r.city_name));
                info!(
                    session = %self.id,
                    state = state_name,
                    count = cities.len(),
                    "[sf-02] Cities loaded"
                );
                let mut state = guard.settle(ResourceStatus::Present, None);
                state.cities.insert(state_name, cities);
            }
            Err(e) => {
                error!(session = %self.id, state = state_name, error = %e, "[sf-02] Cities request failed");
                drop(guard.settle(
                    ResourceStatus::Failed,
                    Some(cities_error_message(state_name)),
                ));
            }
        }
    }

    /// Token first, then states.
    pub async fn bootstrap(&self) {
        self.ensure_token().await;
        self.ensure_states().await;
    }

    /// True iff the state is cached with zero cities.
    ///
    /// False while the state is still unknown.
    pub fn city_has_no_options(&self, state_name: &str) -> bool {
        self.state.read().cities.has_no_options(state_name)
    }

    /// True while any fetch is in flight.
    pub fn loading(&self) -> bool {
        self.state.read().in_flight > 0
    }

    /// Most recent failure message.
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Forget the last failure message.
    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    /// Current auth token.
    pub fn auth_token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// Loaded states, in service order.
    pub fn states(&self) -> Vec<State> {
        self.state.read().states.clone()
    }

    /// Cached cities of a state, `None` when not yet known.
    pub fn cities_for(&self, state_name: &str) -> Option<Vec<City>> {
        self.state.read().cities.get(state_name).map(<[City]>::to_vec)
    }

    /// Snapshot of the city cache.
    pub fn city_cache(&self) -> CityCache {
        self.state.read().cities.clone()
    }

    /// Token lifecycle.
    pub fn token_status(&self) -> ResourceStatus {
        self.state.read().token_status
    }

    /// States list lifecycle.
    pub fn states_status(&self) -> ResourceStatus {
        self.state.read().states_status
    }

    /// Cities lifecycle for one state.
    pub fn cities_status(&self, state_name: &str) -> ResourceStatus {
        self.state
            .read()
            .cities_status
            .get(state_name)
            .copied()
            .unwrap_or_default()
    }
}
