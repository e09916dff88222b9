//! Profile page state
//!
//! The page is a (flow, pane) pair. Stages only exist inside the flows
//! that have them, so e.g. a delete stage can never be paired with the
//! new-profile flow.

use maggi_core::Profile;

use crate::banner::Banner;
use crate::list::{ListItem, SelectList};
use crate::text_input::TextInput;

pub const ADD_PROFILE_LABEL: &str = "Add Profile...";

/// Region holding input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilePane {
    /// Left list of profiles
    #[default]
    Profiles,
    /// Right action menu / form area
    Actions,
}

/// Steps of the add/update name form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStage {
    #[default]
    Name,
    Confirm,
    Cancel,
}

/// Steps of the delete confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteStage {
    #[default]
    View,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileFlow {
    /// Waiting for the initial load
    #[default]
    Retrieve,
    /// Browsing; `current` is set once a profile was picked
    List { current: Option<Profile> },
    New { stage: FormStage },
    /// Handing off to the detail page
    View { target: Profile },
    Update { target: Profile, stage: FormStage },
    Delete { target: Profile, stage: DeleteStage },
}

impl ProfileFlow {
    pub fn list() -> Self {
        ProfileFlow::List { current: None }
    }

    /// Title shown in the page header
    pub fn title(&self) -> String {
        match self {
            ProfileFlow::Retrieve | ProfileFlow::List { .. } | ProfileFlow::View { .. } => {
                " Profiles ".to_string()
            }
            ProfileFlow::New { .. } => " New Profile ".to_string(),
            ProfileFlow::Update { target, .. } => format!(" Update Profile | {} ", target.name),
            ProfileFlow::Delete { target, .. } => format!(" Delete Profile | {} ", target.name),
        }
    }

    /// Active form stage, for the new/update flows
    pub fn form_stage(&self) -> Option<FormStage> {
        match self {
            ProfileFlow::New { stage } | ProfileFlow::Update { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Row of the profile list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileItem {
    Profile(Profile),
    /// Synthetic entry that starts the new-profile flow
    Add,
}

impl ListItem for ProfileItem {
    fn label(&self) -> String {
        match self {
            ProfileItem::Profile(profile) => profile.name.clone(),
            ProfileItem::Add => ADD_PROFILE_LABEL.to_string(),
        }
    }

    fn filter_value(&self) -> String {
        match self {
            ProfileItem::Profile(profile) => profile.name.clone(),
            ProfileItem::Add => String::new(),
        }
    }
}

/// Row of the action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    View,
    Update,
    Delete,
}

impl ProfileAction {
    pub const ALL: [ProfileAction; 3] = [
        ProfileAction::View,
        ProfileAction::Update,
        ProfileAction::Delete,
    ];
}

impl ListItem for ProfileAction {
    fn label(&self) -> String {
        match self {
            ProfileAction::View => "View Profile",
            ProfileAction::Update => "Update Profile",
            ProfileAction::Delete => "Delete Profile",
        }
        .to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ProfilePageState {
    pub flow: ProfileFlow,
    pub pane: ProfilePane,
    /// Cached copy of the stored profiles
    pub profiles: Vec<Profile>,
    pub profile_list: SelectList<ProfileItem>,
    pub action_list: SelectList<ProfileAction>,
    pub input: TextInput,
    pub banner: Option<Banner>,
    /// Bumped on every page entry; results from older epochs are stale
    pub epoch: u64,
    /// A save or delete is in flight; cleared once the reload lands
    pub pending: bool,
    pub width: u16,
    pub height: u16,
}

impl ProfilePageState {
    pub fn new(filterable: bool) -> Self {
        Self {
            flow: ProfileFlow::Retrieve,
            pane: ProfilePane::Profiles,
            profiles: Vec::new(),
            profile_list: SelectList::new(vec![ProfileItem::Add], filterable),
            action_list: SelectList::new(ProfileAction::ALL.to_vec(), false),
            input: TextInput::new("Your new profile name.."),
            banner: None,
            epoch: 0,
            pending: false,
            width: 0,
            height: 0,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let rows = height.saturating_sub(8);
        self.profile_list.set_height(rows);
        self.action_list.set_height(rows);
    }

    /// Store the loaded profiles and rebuild the list, "Add" entry last
    pub fn set_profiles(&mut self, profiles: Vec<Profile>) {
        let mut items: Vec<ProfileItem> =
            profiles.iter().cloned().map(ProfileItem::Profile).collect();
        items.push(ProfileItem::Add);
        self.profiles = profiles;
        self.profile_list.set_items(items);
    }

    /// The profile currently under consideration by the flow
    pub fn current_profile(&self) -> Option<&Profile> {
        match &self.flow {
            ProfileFlow::List { current } => current.as_ref(),
            ProfileFlow::View { target }
            | ProfileFlow::Update { target, .. }
            | ProfileFlow::Delete { target, .. } => Some(target),
            ProfileFlow::Retrieve | ProfileFlow::New { .. } => None,
        }
    }

    /// The highlighted real profile in the left list
    pub fn highlighted_profile(&self) -> Option<&Profile> {
        match self.profile_list.selected() {
            Some(ProfileItem::Profile(profile)) => Some(profile),
            _ => None,
        }
    }

    /// Case-sensitive name collision, ignoring `exclude_id` (the profile being renamed)
    pub fn is_duplicate(&self, name: &str, exclude_id: Option<i64>) -> bool {
        self.profiles
            .iter()
            .any(|p| p.name == name && Some(p.id) != exclude_id)
    }

    /// Back to the list with focus on the profiles pane
    pub fn reset(&mut self) {
        self.flow = ProfileFlow::list();
        self.pane = ProfilePane::Profiles;
        self.input.clear();
        self.input.blur();
        self.banner = None;
    }

    /// Keep the text cursor only where typing is accepted
    pub fn sync_focus(&mut self) {
        let typing =
            self.pane == ProfilePane::Actions && self.flow.form_stage() == Some(FormStage::Name);
        if typing {
            self.input.focus();
        } else {
            self.input.blur();
        }
    }
}
