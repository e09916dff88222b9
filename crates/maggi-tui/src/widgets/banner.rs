//! One-line validation/info banner

use maggi_app::banner::Banner;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use super::truncate;
use crate::theme::Theme;

pub struct BannerLine<'a> {
    banner: Option<&'a Banner>,
    theme: &'a Theme,
}

impl<'a> BannerLine<'a> {
    pub fn new(banner: Option<&'a Banner>, theme: &'a Theme) -> Self {
        Self { banner, theme }
    }
}

impl Widget for BannerLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(banner) = self.banner else {
            return;
        };
        let text = truncate(&banner.message, area.width as usize);
        Line::styled(text, self.theme.banner(banner.severity)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_message() {
        let theme = Theme::default();
        let banner = Banner::error("Please pass a valid key");
        let mut term = TestTerminal::new();
        term.render_widget(BannerLine::new(Some(&banner), &theme), term.area());
        assert!(term.buffer_contains("Please pass a valid key"));
    }

    #[test]
    fn test_no_banner_renders_nothing() {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(20, 1);
        term.render_widget(BannerLine::new(None, &theme), term.area());
        assert_eq!(term.content().trim(), "");
    }
}
