use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub token_validity_minutes: u64,
    /// Guard the catalog routes with the `token` header check.
    pub require_token: bool,
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            data_dir: PathBuf::from("initial-data"),
            token_validity_minutes: 15,
            require_token: false,
            workers: 1,
        }
    }
}

impl ServerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read config file: {}", e))
        })?;

        let config: ServerConfig = toml::from_str(&content).map_err(|e| {
            CatalogError::Config(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// File named by `CONFIG_PATH` (or defaults), then environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::load_from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = env_parse("SERVER_PORT")? {
            self.port = port;
        }
        if let Ok(data_dir) = std::env::var("DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }
        if let Some(minutes) = env_parse("TOKEN_VALIDITY_MINUTES")? {
            self.token_validity_minutes = minutes;
        }
        if let Ok(value) = std::env::var("REQUIRE_TOKEN") {
            self.require_token = matches!(
                value.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        if let Some(workers) = env_parse("SERVER_WORKERS")? {
            self.workers = workers;
        }

        if self.workers == 0 {
            return Err(CatalogError::Config(
                "workers must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Saturates instead of overflowing on absurdly large minute counts.
    pub fn token_validity(&self) -> Duration {
        Duration::from_secs(self.token_validity_minutes.saturating_mul(60))
    }
}

fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| CatalogError::Config(format!("Invalid value for {}: {}", key, raw))),
        Err(_) => Ok(None),
    }
}
