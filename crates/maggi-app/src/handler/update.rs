//! Main update function - page router (TEA pattern)
//!
//! Router-level messages (quit, resize, page transitions, issues) are
//! handled here; everything else goes to the active page's workflow.

use tracing::{debug, warn};

use crate::input_key::InputKey;
use crate::issue::{Issue, IssuePageState};
use crate::message::{Message, PageTransition};
use crate::state::{AppPhase, AppState, Page, PageId};

use super::{detail, profile, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) if key.is_quit() => UpdateResult::message(Message::Quit),

        Message::Tick => UpdateResult::none(),

        Message::Resize { width, height } => {
            state.resize(width, height);
            UpdateResult::none()
        }

        Message::Navigate(transition) => handle_transition(state, transition),

        Message::ShowIssue(issue) => {
            show_issue(state, issue);
            UpdateResult::none()
        }

        other => dispatch(state, other),
    }
}

/// Switch the active page and issue its entry message
fn handle_transition(state: &mut AppState, transition: PageTransition) -> UpdateResult {
    debug!("Page transition from {:?}: {:?}", state.current_page, transition);
    match transition {
        PageTransition::Profiles => {
            state.current_page = PageId::Profile;
            UpdateResult::message(Message::ProfileStart)
        }
        PageTransition::Details(profile) => {
            state.selected_profile = Some(profile.clone());
            state.current_page = PageId::Detail;
            UpdateResult::message(Message::DetailStart { profile })
        }
    }
}

fn show_issue(state: &mut AppState, issue: Issue) {
    warn!("Showing issue page: {}", issue.message);
    let (width, height) = (state.width, state.height);
    let debug = state.debug;
    let page = state
        .pages
        .entry(PageId::Issue)
        .or_insert_with(|| Page::Issue(IssuePageState::new(debug)));

    if let Page::Issue(issue_page) = page {
        issue_page.resize(width, height);
        issue_page.issue = Some(issue);
    }
    state.current_page = PageId::Issue;
}

/// Forward a message verbatim to the active workflow
fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    let current = state.current_page;
    match state.pages.get_mut(&current) {
        Some(Page::Profile(page)) => profile::update(page, message),
        Some(Page::Detail(page)) => detail::update(page, message),
        Some(Page::Issue(_)) => handle_issue_key(message),
        None => {
            warn!("No workflow registered for page {:?}", current);
            UpdateResult::message(Message::ShowIssue(Issue::new(format!(
                "Internal error: no page registered for {:?}",
                current
            ))))
        }
    }
}

/// The issue page is terminal: the only way out is quitting
fn handle_issue_key(message: Message) -> UpdateResult {
    match message {
        Message::Key(InputKey::Char('q')) | Message::Key(InputKey::Esc) => {
            UpdateResult::message(Message::Quit)
        }
        _ => UpdateResult::none(),
    }
}
