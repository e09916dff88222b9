//! Settings loading and the default config file

use std::path::{Path, PathBuf};

use maggi_core::prelude::*;
use maggi_store::DATABASE_FILENAME;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

/// Load settings from `<home>/config.toml`, falling back to defaults
pub fn load_settings(home: &Path) -> Settings {
    let config_path = home.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Where the database lives for these settings
pub fn database_path(settings: &Settings, home: &Path) -> PathBuf {
    settings
        .storage
        .database
        .clone()
        .unwrap_or_else(|| home.join(DATABASE_FILENAME))
}

/// Create `<home>` and a commented default config file if missing
pub fn init_config_dir(home: &Path) -> Result<()> {
    if !home.exists() {
        std::fs::create_dir_all(home)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", home, e)))?;
    }

    let config_path = home.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r##"# maggi configuration

[storage]
# database = "/path/to/maggi.db"

[ui]
filter_details = true
filter_profiles = false
max_width = 120

[theme]
accent = "#04B575"
highlight = "#25A0F5"
error = "#FF4672"
info = "#F5D025"
muted = "#626262"
text = "#DDDDDD"

[generate]
# default_profile = "common"
"##;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
