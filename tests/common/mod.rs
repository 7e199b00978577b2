//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use routetrail::config::{BuildMode, Config, ConfigOverrides, ConfigStore};
use routetrail::router::{app_routes, RouteTable};
use routetrail::ui::app::App;
use routetrail::ui::events::AppEvent;
use routetrail::ui::redirect::RedirectScheduler;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::runtime::Handle;

pub const LOADING_DELAY: Duration = Duration::from_millis(3000);

/// Config store that never touches the user's config directory.
pub fn test_config(start: &str) -> ConfigStore {
    let mut config = Config::default();
    config.app.mode = BuildMode::Development;
    config.app.loading_delay_ms = LOADING_DELAY.as_millis() as u64;
    config.app.initial_path = start.to_string();
    ConfigStore::new(
        config,
        PathBuf::from("/nonexistent/routetrail/config.toml"),
        ConfigOverrides::default(),
    )
}

/// App starting at `start`, plus the receiving end of its event channel.
///
/// Must be called from inside a tokio runtime.
pub fn make_app(start: &str) -> (App, mpsc::Receiver<AppEvent>) {
    make_app_with(test_config(start))
}

pub fn make_app_with(config: ConfigStore) -> (App, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let routes = RouteTable::new(app_routes()).expect("app routes are valid");
    let scheduler = RedirectScheduler::new(Handle::current(), tx);
    (App::new(config, routes, scheduler), rx)
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Feed every pending auto-navigation event to the app.
/// Returns how many navigations were accepted.
pub fn pump_events(app: &mut App, rx: &mpsc::Receiver<AppEvent>) -> usize {
    let mut accepted = 0;
    while let Ok(event) = rx.try_recv() {
        if let AppEvent::AutoNavigate { generation, target } = event {
            if app.on_auto_navigate(generation, target) {
                accepted += 1;
            }
        }
    }
    accepted
}
