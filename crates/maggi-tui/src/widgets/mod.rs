//! Widget components for the TUI

mod banner;
mod button;
mod detail_page;
mod help_bar;
mod issue_page;
mod profile_page;
mod select_list;
mod text_field;

pub use banner::BannerLine;
pub use button::ButtonRow;
pub use detail_page::DetailPage;
pub use help_bar::HelpBar;
pub use issue_page::IssuePage;
pub use profile_page::ProfilePage;
pub use select_list::SelectListView;
pub use text_field::TextField;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to `width` columns, marking the cut with an ellipsis
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
