//! Bordered rendering of a [`SelectList`]

use maggi_app::list::{FilterState, ListItem, SelectList};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::truncate;
use crate::theme::Theme;

pub struct SelectListView<'a, T: ListItem> {
    list: &'a SelectList<T>,
    title: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a, T: ListItem> SelectListView<'a, T> {
    pub fn new(list: &'a SelectList<T>, title: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self {
            list,
            title,
            focused,
            theme,
        }
    }

    fn render_filter(&self, area: Rect, buf: &mut Buffer) {
        let (query, editing) = match self.list.filter() {
            FilterState::Off => return,
            FilterState::Editing(q) => (q.as_str(), true),
            FilterState::Applied(q) => (q.as_str(), false),
        };
        let mut spans = vec![
            Span::styled("/", self.theme.key_hint()),
            Span::styled(query, self.theme.text()),
        ];
        if editing {
            spans.push(Span::styled("_", self.theme.key_hint()));
        }
        Line::from(spans).render(area, buf);
    }
}

impl<T: ListItem> Widget for SelectListView<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = if self.focused {
            self.theme.title()
        } else {
            self.theme.muted()
        };
        let block = self
            .theme
            .block(self.focused)
            .title(Span::styled(self.title, title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut rows = inner.height as usize;
        if self.list.filter().query().is_some() && rows > 1 {
            rows -= 1;
            let filter_row = Rect::new(inner.x, inner.y + rows as u16, inner.width, 1);
            self.render_filter(filter_row, buf);
        }

        if self.list.is_empty() {
            if self.list.filter().query().is_some() {
                Line::styled("No matches", self.theme.muted())
                    .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);
            }
            return;
        }

        // The list scrolls against its own idea of height; keep the
        // selection on screen for the height actually drawn
        let selected = self.list.selected_index();
        let mut offset = self.list.scroll_offset();
        if selected >= offset + rows {
            offset = selected + 1 - rows;
        }
        if selected < offset {
            offset = selected;
        }

        let label_width = (inner.width as usize).saturating_sub(2);
        for (row, (index, item)) in self
            .list
            .visible_items()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            let is_selected = index == selected;
            let marker = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                self.theme.selected(self.focused)
            } else {
                self.theme.text()
            };
            buf.set_style(row_area, style);
            Line::styled(
                format!("{}{}", marker, truncate(&item.label(), label_width)),
                style,
            )
            .render(row_area, buf);
        }
    }
}
