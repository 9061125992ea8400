//! Server startup utilities.

use rollcall_config::{LogFormat, ObservabilityConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter. `RUST_LOG` wins over the configured level.
#[must_use]
pub fn log_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},rollcall=debug,tower_http=debug",
            config.log_level.to_lowercase()
        ))
    })
}

/// Installs the global tracing subscriber.
pub fn init_logging(config: &ObservabilityConfig) {
    let registry = tracing_subscriber::registry().with(log_filter(config));

    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____        ____            ____
   / __ \____  / / /________ _/ / /
  / /_/ / __ \/ / / ___/ __ `/ / /
 / _, _/ /_/ / / / /__/ /_/ / / /
/_/ |_|\____/_/_/\___/\__,_/_/_/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Home:      http://{}/", addr);
    info!("Users:     http://{}/api/users/", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("{}", separator);
}
