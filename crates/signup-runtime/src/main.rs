//! # Signup Runtime
//!
//! Loads configuration, bootstraps the location directory and prints the
//! available states. With a state name argument it also loads and prints
//! that state's cities.
//!
//! ```text
//! signup-runtime [STATE]
//! ```

use anyhow::{Context, Result};
use tracing::{error, info};

use signup_runtime::{ProductionRuntime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    sf_telemetry::init_telemetry(&config.telemetry).context("Failed to init telemetry")?;

    let runtime = ProductionRuntime::new(config).context("Failed to build signup runtime")?;
    runtime.start().await;

    let mut form = runtime.form();
    let states = form.state_dropdown();
    info!("{}: {}", states.placeholder(), states.options.join(", "));

    if let Some(state_name) = std::env::args().nth(1) {
        form.select_state(&state_name).await?;
        let cities = form.city_dropdown();
        if let Some(message) = runtime.session().error() {
            error!("{}", message);
        } else if cities.options.is_empty() {
            info!("{} has no cities", state_name);
        } else {
            info!("Cities in {}: {}", state_name, cities.options.join(", "));
        }
    }

    Ok(())
}
