//! Application configuration
//!
//! Configuration loaded from `.fluxbox.toml`:
//!
//! ```toml
//! log_level = "debug"
//! stop_on_error = true
//!
//! [stores.todos.actions]
//! CLEAR_DONE = "clear_done"
//! ```

use crate::config_file::{load_config_file, ConfigFile};
use anyhow::Context;
use fluxbox::ActionMap;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Application configuration loaded from `.fluxbox.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Abort replaying actions on the first handler failure
    #[serde(default)]
    pub stop_on_error: bool,

    /// Extra static bindings per store, keyed by store name
    #[serde(default)]
    pub stores: BTreeMap<String, StoreConfig>,
}

/// Per-store configuration
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    /// Action type -> method name, merged over the store's own action map
    #[serde(default)]
    pub actions: ActionMap,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            stop_on_error: false,
            stores: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        Self::load_from(load_config_file())
    }

    /// Parse a found config file, or use defaults when it is missing or broken
    pub fn load_from(file: Option<ConfigFile>) -> Self {
        if let Some(file) = file {
            match Self::from_toml_str(&file.content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", file.path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {:#}", file.path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid fluxbox config")
    }

    /// Configured level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level `{}`, using info", self.log_level);
            LevelFilter::Info
        })
    }

    /// Extra bindings configured for a store (empty if none)
    pub fn actions_for(&self, store: &str) -> ActionMap {
        self.stores
            .get(store)
            .map(|config| config.actions.clone())
            .unwrap_or_default()
    }
}
