//! Configuration for fluxbox hosts
//!
//! This crate provides:
//! - Config file lookup (`.fluxbox.toml` in CWD, then home directory)
//! - Application configuration (AppConfig) with per-store action bindings

pub mod app_config;
pub mod config_file;

pub use app_config::{AppConfig, StoreConfig};
pub use config_file::{find_config_file, load_config_file, search_paths, ConfigFile, CONFIG_FILE};
