//! Configuration file parsing for maggi
//!
//! Supports `<maggi home>/config.toml`; every section is optional.

pub mod settings;
pub mod types;

pub use settings::{database_path, init_config_dir, load_settings, CONFIG_FILENAME};
pub use types::*;
