//! # SF Telemetry
//!
//! Structured logging for the signup form runtime.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sf_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SF_SERVICE_NAME` | `signup-form` | Service name attached to startup logs |
//! | `SF_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `SF_CONSOLE_OUTPUT` | `true` | Emit logs to stdout |
//! | `SF_JSON_LOGS` | `false` (`true` in containers) | JSON formatted logs |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter '{directive}': {reason}")]
    Filter {
        /// Directive as configured
        directive: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("Failed to install log subscriber: {0}")]
    SubscriberInit(String),
}

/// Install the global log subscriber.
///
/// Call once at startup, before any subsystem logs.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(config)?;
    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        level = %config.log_level,
        "Telemetry initialized"
    );
    Ok(())
}
