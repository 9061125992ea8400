//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use rollcall_core::RollcallError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Environment variable selecting the `{environment}.toml` layer.
pub const ENVIRONMENT_VAR: &str = "ROLLCALL_ENVIRONMENT";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `ROLLCALL__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RollcallError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RollcallError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Returns the directory configuration files are read from.
    #[must_use]
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }

    /// Reloads the configuration from disk.
    ///
    /// The current configuration is kept if the new one fails to load.
    pub async fn reload(&self) -> Result<(), RollcallError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, RollcallError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for layer in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, layer);
            if Path::new(&path).exists() {
                debug!("Loading {} config from: {}", layer, path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ROLLCALL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_rollcall_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_rollcall_error)?;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| RollcallError::Configuration(format_validation_errors(&errors)))?;

        if app_config.app.environment == "production" && app_config.server.allows_any_origin() {
            warn!("CORS allows any origin in production");
        }

        Ok(app_config)
    }

    /// Gets a specific configuration value by key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn config_error_to_rollcall_error(err: ConfigError) -> RollcallError {
    RollcallError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogFormat;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn dir_str(dir: &TempDir) -> String {
        dir.path().to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_missing_directory_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(dir_str(&dir)).unwrap();
        let config = loader.get().await;

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.url, "sqlite://database.db?mode=rwc");
    }

    #[tokio::test]
    async fn test_default_file_is_applied() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            r#"
[server]
port = 8088

[database]
url = "sqlite::memory:"

[observability]
log_format = "json"
"#,
        );

        let loader = ConfigLoader::new(dir_str(&dir)).unwrap();
        let config = loader.get().await;

        assert_eq!(config.server.port, 8088);
        assert!(config.database.is_in_memory());
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[tokio::test]
    async fn test_local_overrides_default() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server]\nport = 7000\nhost = \"0.0.0.0\"\n");
        write(&dir, "local.toml", "[server]\nport = 7001\n");

        let loader = ConfigLoader::new(dir_str(&dir)).unwrap();
        let config = loader.get().await;

        assert_eq!(config.server.port, 7001);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[tokio::test]
    async fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[observability]\nlog_level = \"chatty\"\n");

        let err = ConfigLoader::new(dir_str(&dir)).err().unwrap();
        assert!(matches!(err, RollcallError::Configuration(_)));
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[server\nport = ");

        assert!(ConfigLoader::new(dir_str(&dir)).is_err());
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        write(&dir, "local.toml", "[server]\nport = 6000\n");

        let loader = ConfigLoader::new(dir_str(&dir)).unwrap();
        assert_eq!(loader.get().await.server.port, 6000);

        write(&dir, "local.toml", "[server]\nport = 6001\n");
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.server.port, 6001);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_config() {
        let dir = TempDir::new().unwrap();
        write(&dir, "local.toml", "[server]\nport = 6100\n");
        let loader = ConfigLoader::new(dir_str(&dir)).unwrap();

        write(&dir, "local.toml", "[server]\nport = 0\n");
        assert!(loader.reload().await.is_err());
        assert_eq!(loader.get().await.server.port, 6100);
    }

    #[tokio::test]
    async fn test_get_value_by_path() {
        let dir = TempDir::new().unwrap();
        write(&dir, "local.toml", "[database]\nmax_connections = 9\n");
        let loader = ConfigLoader::new(dir_str(&dir)).unwrap();

        assert_eq!(loader.get_value::<u32>("database.max_connections").await, Some(9));
        assert_eq!(loader.get_value::<String>("app.name").await, Some("rollcall".to_string()));
        assert_eq!(loader.get_value::<u32>("database.missing").await, None);
    }
}
