use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::types::{ApiConfig, Config};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pocketdex/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pocketdex").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is set
    /// - The sprite template contains an `{id}` placeholder
    /// - Page and batch sizes are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if !self.api.sprite_url_template.contains("{id}") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.sprite_url_template '{}' has no {{id}} placeholder",
                    self.api.sprite_url_template
                ),
            });
        }

        if self.catalog.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "catalog.page_size must be greater than zero".to_string(),
            });
        }

        if self.catalog.backfill_batch_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "catalog.backfill_batch_size must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

impl ApiConfig {
    /// Build the HTTP client shared by every gateway call.
    pub fn build_http_client(&self) -> Result<Client, ConfigError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(self.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(self.timeout_seconds as u64))
            .pool_max_idle_per_host(self.pool_max_idle_per_host as usize)
            .user_agent(self.user_agent.clone())
            .build()?;
        Ok(client)
    }
}
