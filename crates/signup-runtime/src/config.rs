//! # Runtime Configuration
//!
//! Everything the binary needs, loaded from the environment.

use sf_02_location_directory::DirectoryConfig;
use sf_telemetry::TelemetryConfig;
use std::env;
use std::path::PathBuf;

/// Default directory for durable session data.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Remote directory endpoint and retry policies.
    pub directory: DirectoryConfig,
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
    /// Where the persisted auth token lives.
    pub data_dir: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            directory: DirectoryConfig::default(),
            telemetry: TelemetryConfig::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    ///
    /// `SF_DATA_DIR` sets the data directory (default: ./data). See
    /// [`DirectoryConfig::from_env`] and [`TelemetryConfig::from_env`] for
    /// the rest.
    pub fn from_env() -> Self {
        Self {
            directory: DirectoryConfig::from_env(),
            telemetry: TelemetryConfig::from_env(),
            data_dir: env::var("SF_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }

    /// Configuration for tests rooted at `data_dir`.
    pub fn for_testing(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            directory: DirectoryConfig::for_testing(),
            telemetry: TelemetryConfig::for_testing(),
            data_dir: data_dir.into(),
        }
    }
}
