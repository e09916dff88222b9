//! Full-screen error page

use maggi_app::banner::Severity;
use maggi_app::issue::IssuePageState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::Theme;

const QUIT_HINT: &str = "Press q, esc or ctrl+c to quit";

pub struct IssuePage<'a> {
    page: &'a IssuePageState,
    theme: &'a Theme,
}

impl<'a> IssuePage<'a> {
    pub fn new(page: &'a IssuePageState, theme: &'a Theme) -> Self {
        Self { page, theme }
    }
}

impl Widget for IssuePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(self.page.wrap_width().max(20));
        let area = Rect::new(area.x, area.y, width, area.height);

        let block = self
            .theme
            .block(true)
            .border_style(Style::default().fg(self.theme.error))
            .title(Span::styled(" Error ", self.theme.banner(Severity::Error)));

        let mut lines = Vec::new();
        match &self.page.issue {
            Some(issue) => {
                lines.push(Line::styled(issue.message.clone(), self.theme.text()));
                if self.page.debug {
                    if let Some(detail) = &issue.detail {
                        lines.push(Line::default());
                        lines.push(Line::styled(detail.clone(), self.theme.muted()));
                    }
                }
            }
            None => lines.push(Line::styled("Something went wrong.", self.theme.text())),
        }
        lines.push(Line::default());
        lines.push(Line::styled(QUIT_HINT, self.theme.key_hint()));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
