//! Single-line text field with a block cursor

use maggi_app::text_input::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::Theme;

pub struct TextField<'a> {
    input: &'a TextInput,
    label: &'a str,
    theme: &'a Theme,
}

impl<'a> TextField<'a> {
    pub fn new(input: &'a TextInput, label: &'a str, theme: &'a Theme) -> Self {
        Self {
            input,
            label,
            theme,
        }
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.input.is_focused() {
            self.theme.title()
        } else {
            self.theme.muted()
        };
        let mut spans = vec![Span::styled(format!("{} ", self.label), label_style)];

        let value = self.input.value();
        if value.is_empty() {
            if self.input.is_focused() {
                spans.push(Span::styled(
                    " ",
                    self.theme.text().add_modifier(Modifier::REVERSED),
                ));
            }
            spans.push(Span::styled(self.input.placeholder(), self.theme.muted()));
        } else if self.input.is_focused() {
            let cursor = self.input.cursor();
            let before: String = value.chars().take(cursor).collect();
            let at = value
                .chars()
                .nth(cursor)
                .map(String::from)
                .unwrap_or_else(|| " ".to_string());
            let after: String = value.chars().skip(cursor + 1).collect();
            spans.push(Span::styled(before, self.theme.text()));
            spans.push(Span::styled(
                at,
                self.theme.text().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(after, self.theme.text()));
        } else {
            spans.push(Span::styled(value.to_string(), self.theme.text()));
        }

        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use maggi_app::InputKey;

    #[test]
    fn test_placeholder_when_empty() {
        let theme = Theme::default();
        let input = TextInput::new("KEY");
        let mut term = TestTerminal::new();
        term.render_widget(TextField::new(&input, "Key:", &theme), term.area());
        assert!(term.line_contains(0, "Key: KEY"));
    }

    #[test]
    fn test_value_with_cursor() {
        let theme = Theme::default();
        let mut input = TextInput::new("KEY");
        input.focus();
        for c in "EDITOR".chars() {
            input.handle_key(&InputKey::Char(c));
        }
        input.handle_key(&InputKey::Left);

        let mut term = TestTerminal::new();
        term.render_widget(TextField::new(&input, "Key:", &theme), term.area());

        assert!(term.line_contains(0, "Key: EDITOR"));
        // Cursor sits on the final 'R'
        let cell = &term.buffer()[(10, 0)];
        assert_eq!(cell.symbol(), "R");
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }
}
