//! Row of confirm/cancel style buttons

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::Theme;

pub struct ButtonRow<'a> {
    labels: &'a [&'a str],
    /// Index of the button the current stage sits on
    active: Option<usize>,
    theme: &'a Theme,
}

impl<'a> ButtonRow<'a> {
    pub fn new(labels: &'a [&'a str], active: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            labels,
            active,
            theme,
        }
    }
}

impl Widget for ButtonRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.labels.len() * 2);
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[ {} ]", label),
                self.theme.button(self.active == Some(i)),
            ));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_labels_in_order() {
        let theme = Theme::default();
        let mut term = TestTerminal::new();
        term.render_widget(
            ButtonRow::new(&["Confirm", "Cancel"], Some(1), &theme),
            term.area(),
        );
        assert!(term.line_contains(0, "[ Confirm ]  [ Cancel ]"));
    }

    #[test]
    fn test_active_button_is_highlighted() {
        let theme = Theme::default();
        let mut term = TestTerminal::new();
        term.render_widget(
            ButtonRow::new(&["Confirm", "Cancel"], Some(0), &theme),
            term.area(),
        );
        assert_eq!(term.buffer()[(0, 0)].bg, theme.accent);
    }
}
