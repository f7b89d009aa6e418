//! Logging to stderr via env_logger
//!
//! The logger is installed before the config file is read, so lookup and
//! parse messages are not lost. RUST_LOG takes precedence over the
//! configured level.

use fluxbox_config::AppConfig;
use log::LevelFilter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Install the logger; until [`apply`] runs the level is RUST_LOG or info
pub fn init() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .format_timestamp_millis()
        .init();

    if rust_log().is_none() {
        log::set_max_level(DEFAULT_LEVEL);
    }
}

/// Switch to the configured level unless RUST_LOG is set
pub fn apply(config: &AppConfig) {
    if let Some(level) = configured_level(rust_log().as_deref(), config) {
        log::set_max_level(level);
        log::debug!("Log level set to {}", level);
    }
}

fn rust_log() -> Option<String> {
    std::env::var("RUST_LOG").ok().filter(|v| !v.is_empty())
}

fn configured_level(rust_log: Option<&str>, config: &AppConfig) -> Option<LevelFilter> {
    match rust_log {
        Some(_) => None,
        None => Some(config.level_filter()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins_over_config() {
        let config = AppConfig {
            log_level: "trace".to_string(),
            ..Default::default()
        };
        assert_eq!(configured_level(Some("warn"), &config), None);
        assert_eq!(configured_level(None, &config), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_default_config_level() {
        assert_eq!(
            configured_level(None, &AppConfig::default()),
            Some(DEFAULT_LEVEL)
        );
    }
}
