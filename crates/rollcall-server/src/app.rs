//! Application builder.

use crate::di::{build_app_module, AppModule, ServiceResolver};
use crate::startup::print_startup_info;
use axum::Router;
use rollcall_config::AppConfig;
use rollcall_core::{RollcallError, RollcallResult};
use rollcall_rest::create_router;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Connects storage, wires the DI module and assembles the router.
    pub async fn build(self) -> RollcallResult<Application> {
        let config = self.config.unwrap_or_default();

        let module = build_app_module(&config.database).await?;
        let router = create_router(module.as_ref(), &config.server);

        Ok(Application {
            config,
            module,
            router,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully wired application, ready to serve.
pub struct Application {
    config: AppConfig,
    module: Arc<AppModule>,
    router: Router,
}

impl Application {
    /// Returns the configuration the application was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a handle to the HTTP router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Binds the configured address and serves until a shutdown signal.
    pub async fn serve(self) -> RollcallResult<()> {
        let addr = self.config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RollcallError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        print_startup_info(&addr);
        info!("Starting REST server on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| RollcallError::Internal(format!("REST server error: {}", e)))?;

        self.module.database_pool().close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
