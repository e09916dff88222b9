//! Detail page: env and alias lists, the display pane, and the action pane

use maggi_app::banner::Severity;
use maggi_app::detail::{
    DeleteStage, DetailFlow, DetailItem, DetailPageState, DetailPane, EditStage,
};
use maggi_core::{Detail, DetailType};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use super::help_bar::Hints;
use super::{BannerLine, ButtonRow, HelpBar, SelectListView, TextField};
use crate::layout;
use crate::theme::Theme;

pub struct DetailPage<'a> {
    page: &'a DetailPageState,
    theme: &'a Theme,
}

impl<'a> DetailPage<'a> {
    pub fn new(page: &'a DetailPageState, theme: &'a Theme) -> Self {
        Self { page, theme }
    }

    fn focused(&self, pane: DetailPane) -> bool {
        self.page.pane == pane
    }

    fn pane_block(&self, title: &'static str, pane: DetailPane) -> Block<'static> {
        let focused = self.focused(pane);
        let style = if focused {
            self.theme.title()
        } else {
            self.theme.muted()
        };
        self.theme.block(focused).title(Span::styled(title, style))
    }

    fn detail_lines(&self, detail: &Detail) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled("Key:   ", self.theme.muted()),
                Span::styled(detail.key.clone(), self.theme.text()),
            ]),
            Line::from(vec![
                Span::styled("Value: ", self.theme.muted()),
                Span::styled(detail.value.clone(), self.theme.text()),
            ]),
            Line::from(vec![
                Span::styled("Type:  ", self.theme.muted()),
                Span::styled(detail.kind.as_str(), self.theme.text()),
            ]),
            Line::default(),
            Line::styled(detail.statement(), self.theme.title()),
        ]
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let block = self.pane_block(" Display ", DetailPane::Display);
        let inner = block.inner(area);
        block.render(area, buf);

        match self.page.flow {
            DetailFlow::Retrieve => {
                Line::styled("Loading details...", self.theme.muted()).render(inner, buf);
            }
            DetailFlow::List | DetailFlow::View => match &self.page.current {
                Some(detail) if !self.page.empty_display => {
                    Paragraph::new(self.detail_lines(detail))
                        .wrap(Wrap { trim: false })
                        .render(inner, buf);
                }
                _ => {
                    Paragraph::new(Line::styled(
                        format!(
                            "Press enter to add a new {}",
                            kind_noun(self.page.kind)
                        ),
                        self.theme.muted(),
                    ))
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
                }
            },
            DetailFlow::Edit { .. } => self.render_form(inner, buf),
            DetailFlow::Delete { stage } => {
                let mut lines = self
                    .page
                    .current
                    .as_ref()
                    .map(|detail| self.detail_lines(detail))
                    .unwrap_or_default();
                lines.push(Line::default());
                let style = if stage == DeleteStage::View {
                    self.theme.banner(Severity::Error)
                } else {
                    self.theme.muted()
                };
                lines.push(Line::styled(
                    format!("This {} will be removed for good.", kind_noun(self.page.kind)),
                    style,
                ));
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .render(inner, buf);
            }
        }
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        TextField::new(&self.page.key_input, "Key:  ", self.theme).render(rows[0], buf);
        TextField::new(&self.page.value_input, "Value:", self.theme).render(rows[1], buf);

        let key = self.page.key_input.value();
        if !key.is_empty() {
            let preview = Detail::new(0, key, self.page.value_input.value(), self.page.kind, 0);
            Paragraph::new(Line::styled(preview.statement(), self.theme.muted()))
                .wrap(Wrap { trim: false })
                .render(rows[3], buf);
        }
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focused(DetailPane::Action);
        match self.page.flow {
            DetailFlow::Edit { stage, .. } => {
                let block = self.pane_block(" Save ", DetailPane::Action);
                let inner = block.inner(area);
                block.render(area, buf);
                let active = match stage {
                    EditStage::Confirm => Some(0),
                    EditStage::Cancel => Some(1),
                    _ => None,
                };
                ButtonRow::new(&["Confirm", "Cancel"], active, self.theme).render(inner, buf);
            }
            DetailFlow::Delete { stage } => {
                let block = self.pane_block(" Delete ", DetailPane::Action);
                let inner = block.inner(area);
                block.render(area, buf);
                let active = match stage {
                    DeleteStage::Confirm => Some(0),
                    DeleteStage::Cancel => Some(1),
                    _ => None,
                };
                ButtonRow::new(&["Delete", "Cancel"], active, self.theme).render(inner, buf);
            }
            DetailFlow::List | DetailFlow::View if !self.page.empty_display => {
                SelectListView::new(&self.page.action_list, " Actions ", focused, self.theme)
                    .render(area, buf);
            }
            _ => {
                self.pane_block(" Actions ", DetailPane::Action)
                    .render(area, buf);
            }
        }
    }
}

fn kind_noun(kind: DetailType) -> &'static str {
    match kind {
        DetailType::Alias => "alias",
        DetailType::Env => "env var",
    }
}

/// Keys that do something in the focused pane
pub fn hints(page: &DetailPageState) -> Hints {
    let mut hints = Vec::new();
    let list_filtering = page
        .pane
        .kind()
        .is_some_and(|kind| page.list(kind).is_filtering());

    match (&page.flow, page.pane) {
        (DetailFlow::Retrieve, _) => {}
        (_, _) if list_filtering => {
            hints.push(("enter", "apply filter"));
            hints.push(("esc", "clear filter"));
        }
        (DetailFlow::List | DetailFlow::View, DetailPane::Env | DetailPane::Alias) => {
            hints.push(("↑/↓", "move"));
            let adding = page
                .pane
                .kind()
                .and_then(|kind| page.list(kind).selected())
                .is_some_and(|item| matches!(item, DetailItem::Add(_)));
            hints.push(("enter", if adding { "add" } else { "actions" }));
            hints.push(("tab", "next pane"));
            if page
                .pane
                .kind()
                .is_some_and(|kind| page.list(kind).is_filterable())
            {
                hints.push(("/", "filter"));
            }
            hints.push(("esc", "profiles"));
        }
        (DetailFlow::List | DetailFlow::View, _) => {
            hints.push(("↑/↓", "move"));
            hints.push(("enter", "run"));
            hints.push(("tab", "next pane"));
            hints.push(("esc", "back"));
        }
        (DetailFlow::Edit { .. }, DetailPane::Display) => {
            hints.push(("enter", "next field"));
            hints.push(("tab/shift+tab", "move"));
            hints.push(("esc", "cancel"));
        }
        (DetailFlow::Edit { .. } | DetailFlow::Delete { .. }, _) => {
            hints.push(("enter", "select"));
            hints.push(("tab/shift+tab", "move"));
            hints.push(("esc", "cancel"));
        }
    }
    hints.push(("ctrl+c", "quit"));
    hints
}

impl Widget for DetailPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self
            .theme
            .block(true)
            .title(Span::styled(self.page.title(), self.theme.title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let areas = layout::page(inner);
        BannerLine::new(self.page.banner.as_ref(), self.theme).render(areas.banner, buf);
        HelpBar::new(&hints(self.page), self.theme).render(areas.help, buf);

        let body = layout::detail_body(areas.body);
        SelectListView::new(
            &self.page.env_list,
            " Env ",
            self.focused(DetailPane::Env),
            self.theme,
        )
        .render(body.env, buf);
        SelectListView::new(
            &self.page.alias_list,
            " Alias ",
            self.focused(DetailPane::Alias),
            self.theme,
        )
        .render(body.alias, buf);
        self.render_display(body.display, buf);
        self.render_actions(body.actions, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use maggi_app::banner::Banner;
    use maggi_app::detail::EditMode;
    use maggi_core::Profile;

    fn loaded() -> DetailPageState {
        let mut page = DetailPageState::new(false);
        page.profile = Some(Profile::new(1, "dev"));
        page.set_details(vec![
            Detail::new(1, "EDITOR", "vim", DetailType::Env, 1),
            Detail::new(2, "gs", "'git status'", DetailType::Alias, 1),
        ]);
        page.reset_to_list(DetailType::Env);
        page
    }

    fn render(page: &DetailPageState) -> TestTerminal {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(100, 24);
        term.render_widget(DetailPage::new(page, &theme), term.area());
        term
    }

    #[test]
    fn test_lists_show_both_kinds() {
        let term = render(&loaded());
        assert!(term.buffer_contains(" dev "));
        assert!(term.buffer_contains(" Env "));
        assert!(term.buffer_contains(" Alias "));
        assert!(term.buffer_contains("Add env var..."));
        assert!(term.buffer_contains("EDITOR"));
        assert!(term.buffer_contains("Add alias..."));
        assert!(term.buffer_contains("gs"));
    }

    #[test]
    fn test_empty_display_prompts_to_add() {
        let term = render(&loaded());
        assert!(term.buffer_contains("Press enter to add a new env var"));
        assert!(term.buffer_contains("enter add"));
    }

    #[test]
    fn test_selected_detail_shows_statement() {
        let mut page = loaded();
        page.env_list.navigate_down();
        page.sync_selection(DetailType::Env);

        let term = render(&page);
        assert!(term.buffer_contains("Value: vim"));
        assert!(term.buffer_contains("export EDITOR=vim;"));
        assert!(term.buffer_contains("Update Env"));
        assert!(term.buffer_contains("Delete Env"));
    }

    #[test]
    fn test_edit_form_shows_inputs_and_preview() {
        let mut page = loaded();
        page.set_kind(DetailType::Alias);
        page.flow = DetailFlow::Edit {
            mode: EditMode::New,
            stage: EditStage::Value,
        };
        page.pane = DetailPane::Display;
        page.key_input.set_value("ll");
        page.value_input.set_value("'ls -la'");
        page.sync_focus();

        let term = render(&page);
        assert!(term.buffer_contains("dev | New Alias"));
        assert!(term.buffer_contains("Key:   ll"));
        assert!(term.buffer_contains("alias ll='ls -la';"));
        assert!(term.buffer_contains("[ Confirm ]"));
        assert!(term.buffer_contains("enter next field"));
    }

    #[test]
    fn test_delete_shows_warning_and_buttons() {
        let mut page = loaded();
        page.alias_list.navigate_down();
        page.sync_selection(DetailType::Alias);
        page.flow = DetailFlow::Delete {
            stage: DeleteStage::View,
        };
        page.pane = DetailPane::Display;

        let term = render(&page);
        assert!(term.buffer_contains("dev | Delete Alias"));
        assert!(term.buffer_contains("This alias will be removed for good."));
        assert!(term.buffer_contains("[ Delete ]"));
    }

    #[test]
    fn test_banner_is_rendered() {
        let mut page = loaded();
        page.banner = Some(Banner::error("Key can't be empty"));
        let term = render(&page);
        assert!(term.line_contains(1, "Key can't be empty"));
    }

    #[test]
    fn test_retrieve_shows_loading() {
        let page = DetailPageState::new(false);
        let term = render(&page);
        assert!(term.buffer_contains("Loading details..."));
    }
}
