use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Build mode the app presents itself in.
///
/// Only the loading screen logo depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl Default for BuildMode {
    /// Debug builds start in development mode, release builds in production.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

/// Application behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub mode: BuildMode,
    /// Delay before the loading screen moves on to `/home` (default: 3000).
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,
    /// Path the session starts at (default: "/").
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
}

impl AppConfig {
    pub fn is_development(&self) -> bool {
        self.mode == BuildMode::Development
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Values given on the command line. They win over the config file and are
/// re-applied on every reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub mode: Option<BuildMode>,
    pub loading_delay_ms: Option<u64>,
    pub initial_path: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.app.mode = mode;
        }
        if let Some(delay) = self.loading_delay_ms {
            config.app.loading_delay_ms = delay;
        }
        if let Some(path) = &self.initial_path {
            config.app.initial_path = path.clone();
        }
    }
}

fn default_loading_delay_ms() -> u64 {
    3000
}

fn default_initial_path() -> String {
    "/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            loading_delay_ms: default_loading_delay_ms(),
            initial_path: default_initial_path(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
