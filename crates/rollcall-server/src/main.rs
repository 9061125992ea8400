//! # Rollcall Server
//!
//! Main entry point for the Rollcall application.

use rollcall_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use rollcall_core::RollcallResult;
use rollcall_server::startup::{init_logging, print_banner};
use rollcall_server::AppBuilder;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    print_banner();

    info!("Starting Rollcall Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> RollcallResult<()> {
    info!("Environment: {}", config.app.environment);

    let app = AppBuilder::new().with_config(config).build().await?;
    app.serve().await
}
