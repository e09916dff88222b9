//! Location of the maggi home directory

use std::path::PathBuf;

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "MAGGI_HOME";

/// Directory name created under the user's home
pub const HOME_DIR: &str = ".maggi";

/// Resolve the directory holding `maggi.db` and `config.toml`.
///
/// `$MAGGI_HOME` wins when set and non-empty, otherwise `~/.maggi`.
pub fn maggi_home() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(HOME_DIR),
    }
}
