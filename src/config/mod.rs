//! Configuration: TOML file, CLI overrides and the shared store.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{AppConfig, BuildMode, Config, ConfigOverrides, LogConfig};
