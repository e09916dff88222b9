//! Application state (Model in TEA pattern)

use std::collections::HashMap;

use maggi_core::Profile;

use crate::config::Settings;
use crate::detail::DetailPageState;
use crate::issue::IssuePageState;
use crate::profile::ProfilePageState;

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Page identifiers known to the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Active before the first transition; has no workflow
    Start,
    Profile,
    Detail,
    Issue,
}

/// A registered page and its workflow state
#[derive(Debug, Clone)]
pub enum Page {
    Profile(ProfilePageState),
    Detail(DetailPageState),
    Issue(IssuePageState),
}

impl Page {
    fn resize(&mut self, width: u16, height: u16) {
        match self {
            Page::Profile(page) => page.resize(width, height),
            Page::Detail(page) => page.resize(width, height),
            Page::Issue(page) => page.resize(width, height),
        }
    }
}

/// Router state: the registered pages and which one is active
#[derive(Debug)]
pub struct AppState {
    pub pages: HashMap<PageId, Page>,
    pub current_page: PageId,
    /// Profile carried from the profile page into the detail page
    pub selected_profile: Option<Profile>,
    pub phase: AppPhase,
    pub debug: bool,
    pub width: u16,
    pub height: u16,
}

impl AppState {
    pub fn new(settings: &Settings, debug: bool) -> Self {
        let mut pages = HashMap::new();
        pages.insert(
            PageId::Profile,
            Page::Profile(ProfilePageState::new(settings.ui.filter_profiles)),
        );
        pages.insert(
            PageId::Detail,
            Page::Detail(DetailPageState::new(settings.ui.filter_details)),
        );
        pages.insert(PageId::Issue, Page::Issue(IssuePageState::new(debug)));

        Self {
            pages,
            current_page: PageId::Start,
            selected_profile: None,
            phase: AppPhase::Running,
            debug,
            width: 0,
            height: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Forward new dimensions to every page, active or not
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        for page in self.pages.values_mut() {
            page.resize(width, height);
        }
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.pages.get(&self.current_page)
    }

    pub fn profile_page(&self) -> Option<&ProfilePageState> {
        match self.pages.get(&PageId::Profile) {
            Some(Page::Profile(page)) => Some(page),
            _ => None,
        }
    }

    pub fn detail_page(&self) -> Option<&DetailPageState> {
        match self.pages.get(&PageId::Detail) {
            Some(Page::Detail(page)) => Some(page),
            _ => None,
        }
    }

    pub fn issue_page(&self) -> Option<&IssuePageState> {
        match self.pages.get(&PageId::Issue) {
            Some(Page::Issue(page)) => Some(page),
            _ => None,
        }
    }
}
