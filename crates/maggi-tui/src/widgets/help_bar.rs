//! Key hints for the focused pane

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::Theme;

/// `(key, description)` pairs
pub type Hints = Vec<(&'static str, &'static str)>;

pub struct HelpBar<'a> {
    hints: &'a [(&'static str, &'static str)],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: &'a [(&'static str, &'static str)], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, description)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", self.theme.muted()));
            }
            spans.push(Span::styled(*key, self.theme.key_hint()));
            spans.push(Span::styled(format!(" {}", description), self.theme.muted()));
        }
        Line::from(spans).render(area, buf);
    }
}
