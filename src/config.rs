//! Application configuration.
//!
//! Optional `config.toml` under the platform config directory; every field
//! has a default so a missing file means default configuration. CLI flags
//! override file values after loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Collection endpoint the catalog is fetched from by default.
pub const DEFAULT_ENDPOINT: &str = "https://api.sampleapis.com/coffee/hot";

const DEFAULT_TICK_MS: u64 = 250;

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
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Collection endpoint for the catalog fetch.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// UI tick interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/cuppa/config.toml` on Unix, or the platform equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory when
    /// no config directory is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cuppa").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

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
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("endpoint must be an http(s) URL, got '{}'", self.endpoint),
            });
        }

        if self.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
