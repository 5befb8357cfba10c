//! # Signup Runtime Library
//!
//! Composition root for the signup form. The binary in `main.rs` is a thin
//! driver over [`SignupRuntime`].
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Install logging
//! 3. Validate the directory configuration
//! 4. Open durable storage and build the location session
//! 5. Bootstrap: auth token, then the states list

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;

pub use config::{RuntimeConfig, DEFAULT_DATA_DIR};

use sf_02_location_directory::{
    ConfigError, DurableStorage, FileStorage, HttpTransport, LocationSession, ReqwestTransport,
    StorageError, TransportError,
};
use sf_03_signup_form::SignupForm;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Runtime startup errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Directory configuration rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Data directory could not be prepared.
    #[error("Storage setup failed: {0}")]
    Storage(#[from] StorageError),

    /// HTTP client could not be built.
    #[error("Transport setup failed: {0}")]
    Transport(#[from] TransportError),
}

/// Runtime with the production adapters.
pub type ProductionRuntime = SignupRuntime<ReqwestTransport, FileStorage>;

/// Owns one location session and hands out forms bound to it.
pub struct SignupRuntime<T: HttpTransport, S: DurableStorage> {
    config: RuntimeConfig,
    session: Arc<LocationSession<T, S>>,
}

impl ProductionRuntime {
    /// Wire `reqwest` and file storage under `config.data_dir`.
    pub fn new(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        config.directory.validate()?;
        let storage = FileStorage::in_dir(&config.data_dir)?;
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_ports(config, transport, storage))
    }
}

impl<T: HttpTransport, S: DurableStorage> SignupRuntime<T, S> {
    /// Wire explicit adapters.
    pub fn with_ports(config: RuntimeConfig, transport: T, storage: S) -> Self {
        let session = Arc::new(LocationSession::new(
            config.directory.clone(),
            transport,
            storage,
        ));
        info!(session = %session.session_id(), "Signup runtime created");
        Self { config, session }
    }

    /// Active configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Shared location session.
    pub fn session(&self) -> &Arc<LocationSession<T, S>> {
        &self.session
    }

    /// Fetch the auth token and the states list.
    pub async fn start(&self) {
        info!("===========================================");
        info!("  Signup Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("  Directory: {}", self.config.directory.base_url);
        info!("  Data Dir: {:?}", self.config.data_dir);
        info!("===========================================");

        self.session.bootstrap().await;

        match self.session.error() {
            Some(message) => warn!("Bootstrap incomplete: {}", message),
            None => info!(
                states = self.session.states().len(),
                "Location directory ready"
            ),
        }
    }

    /// A fresh form bound to this runtime's session.
    pub fn form(&self) -> SignupForm<T, S> {
        SignupForm::new(Arc::clone(&self.session))
    }
}
