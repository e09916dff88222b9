//! Terminal multiplexer session discovery
//!
//! When maggi runs inside tmux, the session name doubles as a profile
//! name: a session called `prod` picks up the `prod` profile.

use std::process::Command;

use crate::prelude::*;

/// Set by tmux inside every pane it manages
pub const TMUX_ENV: &str = "TMUX";

/// Detect the name of the active tmux session.
///
/// Returns `Ok(None)` outside tmux, and an error when tmux is expected
/// but cannot be queried.
pub fn detect_session() -> Result<Option<String>> {
    match std::env::var(TMUX_ENV) {
        Ok(value) if !value.is_empty() => {}
        _ => {
            debug!("{} not set, no multiplexer session", TMUX_ENV);
            return Ok(None);
        }
    }

    let tmux = which::which("tmux")
        .map_err(|e| Error::session(format!("tmux binary not found: {}", e)))?;

    let output = Command::new(tmux)
        .args(["display-message", "-p", "#S"])
        .output()?;

    if !output.status.success() {
        return Err(Error::session(format!(
            "tmux display-message exited with {}",
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let name = parse_session_name(&stdout);
    debug!("Detected tmux session: {:?}", name);
    Ok(name)
}

/// Strip whitespace and surrounding quotes from raw session output.
pub fn parse_session_name(raw: &str) -> Option<String> {
    let name = raw.trim().trim_matches(|c| c == '\'' || c == '"').trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_plain_name() {
        assert_eq!(parse_session_name("dev\n"), Some("dev".to_string()));
    }

    #[test]
    fn test_parse_quoted_name() {
        assert_eq!(parse_session_name("'prod'\n"), Some("prod".to_string()));
        assert_eq!(parse_session_name("\"stg\""), Some("stg".to_string()));
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(parse_session_name("  \n"), None);
        assert_eq!(parse_session_name("''"), None);
    }

    #[test]
    #[serial]
    fn test_no_session_outside_tmux() {
        let saved = std::env::var_os(TMUX_ENV);
        std::env::remove_var(TMUX_ENV);

        assert!(matches!(detect_session(), Ok(None)));

        if let Some(value) = saved {
            std::env::set_var(TMUX_ENV, value);
        }
    }
}
