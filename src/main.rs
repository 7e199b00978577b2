use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use routetrail::config::{BuildMode, Config, ConfigOverrides, ConfigStore};
use routetrail::logging;
use routetrail::ui;

/// Terminal demo of a router that records every visited path.
#[derive(Debug, Parser)]
#[command(name = "routetrail", version, about)]
struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Build mode; selects the loading page logo
    #[arg(long, value_enum)]
    mode: Option<BuildMode>,

    /// Path to open on startup
    #[arg(long, value_name = "PATH")]
    start: Option<String>,

    /// Delay before the loading page moves on, in milliseconds
    #[arg(long, value_name = "N")]
    loading_delay_ms: Option<u64>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mode: self.mode,
            loading_delay_ms: self.loading_delay_ms,
            initial_path: self.start.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = ConfigStore::load(path.clone(), cli.overrides())
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    let log_path = logging::init_tracing(&config.get().log).context("failed to set up logging")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %path.display(),
        log = %log_path.display(),
        "starting routetrail"
    );

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let result = ui::runtime::run(config, runtime.handle().clone());
    runtime.shutdown_timeout(std::time::Duration::from_secs(1));

    if let Err(err) = &result {
        tracing::error!(error = %err, "session failed");
    }
    result.context("terminal session failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "routetrail",
            "--config",
            "/tmp/rt.toml",
            "--mode",
            "production",
            "--start",
            "/news",
            "--loading-delay-ms",
            "500",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/rt.toml")));

        let overrides = cli.overrides();
        assert_eq!(overrides.mode, Some(BuildMode::Production));
        assert_eq!(overrides.initial_path.as_deref(), Some("/news"));
        assert_eq!(overrides.loading_delay_ms, Some(500));
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let cli = Cli::try_parse_from(["routetrail"]).unwrap();
        let overrides = cli.overrides();
        assert!(overrides.mode.is_none());
        assert!(overrides.loading_delay_ms.is_none());
        assert!(overrides.initial_path.is_none());
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["routetrail", "--mode", "staging"]).is_err());
    }
}
