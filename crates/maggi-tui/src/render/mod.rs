//! Main render/view function (View in TEA pattern)

use maggi_app::state::{AppState, Page};
use ratatui::text::Line;
use ratatui::Frame;

use crate::layout;
use crate::theme::Theme;
use crate::widgets::{DetailPage, IssuePage, ProfilePage};

/// Render the active page.
///
/// Pure with respect to `state`: list scrolling is tracked by the state
/// itself, so nothing here needs `&mut`.
pub fn view(frame: &mut Frame, state: &AppState, theme: &Theme, max_width: u16) {
    let area = layout::centered(frame.area(), max_width);

    match state.active_page() {
        Some(Page::Profile(page)) => frame.render_widget(ProfilePage::new(page, theme), area),
        Some(Page::Detail(page)) => frame.render_widget(DetailPage::new(page, theme), area),
        Some(Page::Issue(page)) => frame.render_widget(IssuePage::new(page, theme), area),
        None => frame.render_widget(Line::styled("Starting...", theme.muted()), area),
    }
}
