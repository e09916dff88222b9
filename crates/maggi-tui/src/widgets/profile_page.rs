//! Profile page: profile list beside the action menu or the active form

use maggi_app::profile::{DeleteStage, FormStage, ProfileFlow, ProfilePageState, ProfilePane};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::help_bar::Hints;
use super::{BannerLine, ButtonRow, HelpBar, SelectListView, TextField};
use crate::layout;
use crate::theme::Theme;

pub struct ProfilePage<'a> {
    page: &'a ProfilePageState,
    theme: &'a Theme,
}

impl<'a> ProfilePage<'a> {
    pub fn new(page: &'a ProfilePageState, theme: &'a Theme) -> Self {
        Self { page, theme }
    }

    fn side_focused(&self) -> bool {
        self.page.pane == ProfilePane::Actions
    }

    fn render_side(&self, area: Rect, buf: &mut Buffer) {
        match &self.page.flow {
            ProfileFlow::Retrieve => {
                let block = self.theme.block(false);
                Paragraph::new(Line::styled("Loading profiles...", self.theme.muted()))
                    .block(block)
                    .render(area, buf);
            }
            ProfileFlow::List { current } => {
                let title = match current {
                    Some(profile) => format!(" {} ", profile.name),
                    None => " Actions ".to_string(),
                };
                SelectListView::new(&self.page.action_list, &title, self.side_focused(), self.theme)
                    .render(area, buf);
            }
            ProfileFlow::View { target } => {
                let block = self.theme.block(false);
                Paragraph::new(Line::styled(
                    format!("Opening {}...", target.name),
                    self.theme.muted(),
                ))
                .block(block)
                .render(area, buf);
            }
            ProfileFlow::New { stage } | ProfileFlow::Update { stage, .. } => {
                self.render_form(*stage, area, buf);
            }
            ProfileFlow::Delete { target, stage } => {
                self.render_delete(&target.name, *stage, area, buf);
            }
        }
    }

    fn render_form(&self, stage: FormStage, area: Rect, buf: &mut Buffer) {
        let focused = self.side_focused();
        let block = self.theme.block(focused).title(Span::styled(
            " Name ",
            if focused {
                self.theme.title()
            } else {
                self.theme.muted()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        TextField::new(&self.page.input, ">", self.theme).render(rows[0], buf);
        let active = match stage {
            FormStage::Name => None,
            FormStage::Confirm => Some(0),
            FormStage::Cancel => Some(1),
        };
        ButtonRow::new(&["Confirm", "Cancel"], active.filter(|_| focused), self.theme)
            .render(rows[2], buf);
    }

    fn render_delete(&self, name: &str, stage: DeleteStage, area: Rect, buf: &mut Buffer) {
        let focused = self.side_focused();
        let block = self.theme.block(focused).title(Span::styled(
            " Delete ",
            if focused {
                self.theme.title()
            } else {
                self.theme.muted()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        let text_style = if focused && stage == DeleteStage::View {
            self.theme.text()
        } else {
            self.theme.muted()
        };
        Paragraph::new(Line::styled(
            format!(
                "Delete {} together with all of its aliases and env vars?",
                name
            ),
            text_style,
        ))
        .wrap(Wrap { trim: true })
        .render(rows[0], buf);

        let active = match stage {
            DeleteStage::View => None,
            DeleteStage::Confirm => Some(0),
            DeleteStage::Cancel => Some(1),
        };
        ButtonRow::new(&["Delete", "Cancel"], active.filter(|_| focused), self.theme)
            .render(rows[1], buf);
    }
}

/// Keys that do something in the focused pane
pub fn hints(page: &ProfilePageState) -> Hints {
    let mut hints = Vec::new();
    match (&page.flow, page.pane) {
        (ProfileFlow::Retrieve, _) => {}
        (_, ProfilePane::Profiles) if page.profile_list.is_filtering() => {
            hints.push(("enter", "apply filter"));
            hints.push(("esc", "clear filter"));
        }
        (_, ProfilePane::Profiles) => {
            hints.push(("↑/↓", "move"));
            hints.push(("enter", "select"));
            hints.push(("tab", "actions"));
            if page.profile_list.is_filterable() {
                hints.push(("/", "filter"));
            }
        }
        (ProfileFlow::List { .. }, ProfilePane::Actions) => {
            hints.push(("↑/↓", "move"));
            hints.push(("enter", "run"));
            hints.push(("tab", "profiles"));
        }
        (_, ProfilePane::Actions) => {
            hints.push(("enter", "next"));
            hints.push(("tab/shift+tab", "move"));
            hints.push(("esc", "cancel"));
        }
    }
    hints.push(("ctrl+c", "quit"));
    hints
}

impl Widget for ProfilePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self
            .theme
            .block(true)
            .title(Span::styled(self.page.flow.title(), self.theme.title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let areas = layout::page(inner);
        BannerLine::new(self.page.banner.as_ref(), self.theme).render(areas.banner, buf);
        HelpBar::new(&hints(self.page), self.theme).render(areas.help, buf);

        let body = layout::profile_body(areas.body);
        SelectListView::new(
            &self.page.profile_list,
            " Profiles ",
            self.page.pane == ProfilePane::Profiles,
            self.theme,
        )
        .render(body.profiles, buf);
        self.render_side(body.side, buf);
    }
}
