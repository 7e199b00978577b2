//! Shared configuration storage.
//!
//! Holds the effective config (file plus CLI overrides) behind a lock so the
//! UI thread can reload it while other holders keep reading.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::{Config, ConfigOverrides};

#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
    overrides: ConfigOverrides,
}

impl ConfigStore {
    /// Create a store from an already validated config.
    pub fn new(config: Config, path: PathBuf, overrides: ConfigOverrides) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides,
        }
    }

    /// Load `path`, apply `overrides` and validate the result.
    pub fn load(path: PathBuf, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let config = Self::read(&path, &overrides)?;
        tracing::info!(path = %path.display(), mode = ?config.app.mode, "configuration loaded");
        Ok(Self::new(config, path, overrides))
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Reload config from the file.
    ///
    /// On success, replaces the current config. On failure, keeps the old
    /// config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Self::read(&self.path, &self.overrides)?;
        *self.inner.write() = config;
        tracing::info!(path = %self.path.display(), "configuration reloaded");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path, overrides: &ConfigOverrides) -> Result<Config, ConfigError> {
        let mut config = Config::load_from(path)?;
        overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
