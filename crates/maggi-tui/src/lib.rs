//! maggi-tui - Terminal UI for maggi
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from maggi-app and adds terminal rendering, event polling, and the
//! page widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
pub use theme::Theme;
