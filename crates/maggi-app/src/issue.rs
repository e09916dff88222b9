//! Issue page: full-screen display of a surfaced error

use maggi_core::Error;

/// An error surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub message: String,
    /// Diagnostic detail shown in debug mode
    pub detail: Option<String>,
}

impl Issue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    /// Wrap a store or internal error with what was being attempted
    pub fn from_error(context: &str, err: &Error) -> Self {
        Self {
            message: format!("{}: {}", context, err),
            detail: Some(format!("{:?}", err)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IssuePageState {
    pub issue: Option<Issue>,
    /// Show `Issue::detail` under the message
    pub debug: bool,
    pub width: u16,
    pub height: u16,
}

impl IssuePageState {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            ..Self::default()
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Column the message wraps at
    pub fn wrap_width(&self) -> u16 {
        self.width.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_keeps_context_and_debug_detail() {
        let issue = Issue::from_error("loading profiles", &Error::store("disk I/O error"));
        assert_eq!(issue.message, "loading profiles: Store error: disk I/O error");
        assert!(issue.detail.unwrap().contains("Store"));
    }

    #[test]
    fn test_wrap_width_caps_at_100() {
        let mut page = IssuePageState::new(false);
        page.resize(180, 40);
        assert_eq!(page.wrap_width(), 100);
        page.resize(60, 20);
        assert_eq!(page.wrap_width(), 60);
    }
}
