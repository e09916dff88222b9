//! Screen layout definitions for the TUI
//!
//! Every page renders inside a frame centered horizontally and capped at the
//! configured `max_width`, split into a banner row, the panes, and a help row.

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows shared by every workflow page (inside the page border)
#[derive(Debug, Clone, Copy)]
pub struct PageAreas {
    /// Validation/info banner
    pub banner: Rect,
    /// Workflow panes
    pub body: Rect,
    /// Key hints
    pub help: Rect,
}

/// Panes of the profile page
#[derive(Debug, Clone, Copy)]
pub struct ProfileAreas {
    pub profiles: Rect,
    /// Action menu, form, or delete confirmation
    pub side: Rect,
}

/// Panes of the detail page
#[derive(Debug, Clone, Copy)]
pub struct DetailAreas {
    pub env: Rect,
    pub alias: Rect,
    pub display: Rect,
    pub actions: Rect,
}

/// Center a frame of at most `max_width` columns
pub fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width.max(1));
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

pub fn page(inner: Rect) -> PageAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Banner
        Constraint::Min(3),    // Panes
        Constraint::Length(1), // Help bar
    ])
    .split(inner);

    PageAreas {
        banner: chunks[0],
        body: chunks[1],
        help: chunks[2],
    }
}

pub fn profile_body(area: Rect) -> ProfileAreas {
    let chunks =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Min(10)]).split(area);
    ProfileAreas {
        profiles: chunks[0],
        side: chunks[1],
    }
}

pub fn detail_body(area: Rect) -> DetailAreas {
    let columns =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Min(10)]).split(area);
    let lists =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(columns[0]);
    // Action menu and buttons need two rows plus borders
    let right = Layout::vertical([Constraint::Min(4), Constraint::Length(4)]).split(columns[1]);

    DetailAreas {
        env: lists[0],
        alias: lists[1],
        display: right[0],
        actions: right[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_caps_width() {
        let frame = centered(Rect::new(0, 0, 200, 40), 120);
        assert_eq!(frame.width, 120);
        assert_eq!(frame.x, 40);
        assert_eq!(frame.height, 40);
    }

    #[test]
    fn test_centered_narrow_terminal_uses_full_width() {
        let frame = centered(Rect::new(0, 0, 80, 24), 120);
        assert_eq!(frame, Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn test_page_rows() {
        let areas = page(Rect::new(1, 1, 78, 22));
        assert_eq!(areas.banner.height, 1);
        assert_eq!(areas.help.height, 1);
        assert_eq!(areas.body.height, 20);
        assert_eq!(areas.help.y, 22);
    }

    #[test]
    fn test_detail_body_stacks_lists() {
        let areas = detail_body(Rect::new(0, 0, 100, 20));
        assert_eq!(areas.env.x, areas.alias.x);
        assert!(areas.alias.y > areas.env.y);
        assert_eq!(areas.actions.height, 4);
        assert_eq!(areas.display.height, 16);
    }
}
