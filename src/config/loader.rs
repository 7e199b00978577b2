use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const MAX_LOADING_DELAY_MS: u64 = 60_000;

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/routetrail/config.toml` on Linux, or the equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("routetrail").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML; validation is left to the caller so
    ///   overrides can be applied first.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The loading delay is between 1 ms and one minute
    /// - The initial path is absolute
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delay = self.app.loading_delay_ms;
        if delay == 0 || delay > MAX_LOADING_DELAY_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "loading_delay_ms must be between 1 and {}, got {}",
                    MAX_LOADING_DELAY_MS, delay
                ),
            });
        }

        if !self.app.initial_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "initial_path must start with '/', got '{}'",
                    self.app.initial_path
                ),
            });
        }

        Ok(())
    }
}
