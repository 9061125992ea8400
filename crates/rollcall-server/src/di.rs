//! Dependency injection module using Shaku.

use rollcall_config::DatabaseConfig;
use rollcall_core::{module, HasComponent, RollcallResult};
use rollcall_repository::{DatabasePool, DatabasePoolInterface, SqliteUserRepository, UserRepository};
use rollcall_service::{UserService, UserServiceImpl};
use std::sync::Arc;
use tracing::info;

// Application module: database pool, SQLite repository and user service.
module! {
    pub AppModule {
        components = [
            DatabasePool,
            SqliteUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Connects to the database, applies migrations when enabled, and builds
/// the application module around the connected pool.
pub async fn build_app_module(db_config: &DatabaseConfig) -> RollcallResult<Arc<AppModule>> {
    let db_pool = DatabasePool::new(db_config).await?;

    if db_config.run_migrations {
        db_pool.run_migrations().await?;
    } else {
        info!("Skipping database migrations");
    }

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(db_pool.into_parameters())
        .build();

    Ok(Arc::new(module))
}

/// Resolves the components handlers and lifecycle code need.
pub trait ServiceResolver {
    /// Resolves the user service from the module.
    fn user_service(&self) -> Arc<dyn UserService>;

    /// Resolves the user repository from the module.
    fn user_repository(&self) -> Arc<dyn UserRepository>;

    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl ServiceResolver for AppModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }

    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
