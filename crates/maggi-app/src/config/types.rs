//! Configuration types for maggi

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub generate: GenerateSettings,
}

/// Database location
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Overrides `<maggi home>/maggi.db`
    #[serde(default)]
    pub database: Option<PathBuf>,
}

/// UI behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Allow `/` filtering on the Env/Alias lists
    #[serde(default = "default_true")]
    pub filter_details: bool,

    /// Allow `/` filtering on the profile list
    #[serde(default)]
    pub filter_profiles: bool,

    /// Width of the centered page frame
    #[serde(default = "default_max_width")]
    pub max_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            filter_details: true,
            filter_profiles: false,
            max_width: default_max_width(),
        }
    }
}

/// Colours, as names ("red") or hex ("#04B575")
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeSettings {
    #[serde(default = "default_accent")]
    pub accent: String,

    #[serde(default = "default_highlight")]
    pub highlight: String,

    #[serde(default = "default_error")]
    pub error: String,

    #[serde(default = "default_info")]
    pub info: String,

    #[serde(default = "default_muted")]
    pub muted: String,

    #[serde(default = "default_text")]
    pub text: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            highlight: default_highlight(),
            error: default_error(),
            info: default_info(),
            muted: default_muted(),
            text: default_text(),
        }
    }
}

/// `maggi generate` defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GenerateSettings {
    /// Profile emitted before the session profile when `--profile` is absent
    #[serde(default)]
    pub default_profile: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_max_width() -> u16 {
    120
}

fn default_accent() -> String {
    "#04B575".to_string()
}

fn default_highlight() -> String {
    "#25A0F5".to_string()
}

fn default_error() -> String {
    "#FF4672".to_string()
}

fn default_info() -> String {
    "#F5D025".to_string()
}

fn default_muted() -> String {
    "#626262".to_string()
}

fn default_text() -> String {
    "#DDDDDD".to_string()
}
