//! Colour theme, built once from `[theme]` settings and handed to every widget

use std::str::FromStr;

use maggi_app::banner::Severity;
use maggi_app::config::ThemeSettings;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use tracing::warn;

pub const DEFAULT_ACCENT: Color = Color::Rgb(0x04, 0xB5, 0x75);
pub const DEFAULT_HIGHLIGHT: Color = Color::Rgb(0x25, 0xA0, 0xF5);
pub const DEFAULT_ERROR: Color = Color::Rgb(0xFF, 0x46, 0x72);
pub const DEFAULT_INFO: Color = Color::Rgb(0xF5, 0xD0, 0x25);
pub const DEFAULT_MUTED: Color = Color::Rgb(0x62, 0x62, 0x62);
pub const DEFAULT_TEXT: Color = Color::Rgb(0xDD, 0xDD, 0xDD);

/// Foreground used on top of highlighted backgrounds
const CONTRAST_FG: Color = Color::Black;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Titles and focused borders
    pub accent: Color,
    /// Selected rows and active buttons
    pub highlight: Color,
    pub error: Color,
    pub info: Color,
    /// Placeholders, hints, unfocused borders
    pub muted: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT,
            highlight: DEFAULT_HIGHLIGHT,
            error: DEFAULT_ERROR,
            info: DEFAULT_INFO,
            muted: DEFAULT_MUTED,
            text: DEFAULT_TEXT,
        }
    }
}

fn parse_color(name: &str, value: &str, fallback: Color) -> Color {
    Color::from_str(value.trim()).unwrap_or_else(|_| {
        warn!("Invalid theme colour {}={:?}, using default", name, value);
        fallback
    })
}

impl Theme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        Self {
            accent: parse_color("accent", &settings.accent, DEFAULT_ACCENT),
            highlight: parse_color("highlight", &settings.highlight, DEFAULT_HIGHLIGHT),
            error: parse_color("error", &settings.error, DEFAULT_ERROR),
            info: parse_color("info", &settings.info, DEFAULT_INFO),
            muted: parse_color("muted", &settings.muted, DEFAULT_MUTED),
            text: parse_color("text", &settings.text, DEFAULT_TEXT),
        }
    }

    // --- Text styles ---

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    // --- Selection styles ---

    /// Highlighted list row; solid only while its pane has focus
    pub fn selected(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(CONTRAST_FG)
                .bg(self.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.highlight)
        }
    }

    pub fn button(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(CONTRAST_FG)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            self.muted()
        }
    }

    pub fn banner(&self, severity: Severity) -> Style {
        let color = match severity {
            Severity::Info => self.info,
            Severity::Error => self.error,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    // --- Block builders ---

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            self.muted()
        }
    }

    pub fn block<'a>(&self, focused: bool) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border(focused))
    }
}
