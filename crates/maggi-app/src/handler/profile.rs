//! Profile workflow transitions

use tracing::{debug, info, trace};

use crate::banner::Banner;
use crate::input_key::InputKey;
use crate::message::{Message, PageTransition};
use crate::profile::{
    DeleteStage, FormStage, ProfileAction, ProfileFlow, ProfileItem, ProfilePageState,
    ProfilePane,
};
use maggi_core::Profile;

use super::{UpdateAction, UpdateResult};

const EMPTY_NAME: &str =
    "Please pass a valid profile name. You can exit flow by pressing <esc> if needed";
const NO_PROFILE_SELECTED: &str =
    "Select a profile from the list first. Press <tab> to get back to it";

pub(crate) fn update(page: &mut ProfilePageState, message: Message) -> UpdateResult {
    match message {
        Message::ProfileStart => handle_start(page),
        Message::ProfilesLoaded { epoch, profiles } => {
            if is_stale(page, epoch) {
                return UpdateResult::none();
            }
            page.pending = false;
            handle_loaded(page, profiles);
            UpdateResult::none()
        }
        Message::ProfileSaved { epoch, profile } => {
            if is_stale(page, epoch) {
                return UpdateResult::none();
            }
            info!("Profile {} saved", profile.name);
            UpdateResult::action(UpdateAction::LoadProfiles { epoch })
        }
        Message::ProfileDeleted { epoch, profile } => {
            if is_stale(page, epoch) {
                return UpdateResult::none();
            }
            info!("Profile {} deleted", profile.name);
            if page.current_profile() == Some(&profile) {
                page.flow = ProfileFlow::list();
            }
            UpdateResult::action(UpdateAction::LoadProfiles { epoch })
        }
        Message::Key(key) => handle_key(page, key),
        other => {
            trace!("Profile page ignoring {:?}", other);
            UpdateResult::none()
        }
    }
}

fn is_stale(page: &ProfilePageState, epoch: u64) -> bool {
    if epoch != page.epoch {
        debug!(
            "Dropping stale profile result (epoch {}, current {})",
            epoch, page.epoch
        );
        return true;
    }
    false
}

fn handle_start(page: &mut ProfilePageState) -> UpdateResult {
    page.epoch += 1;
    page.reset();
    page.pending = false;
    page.flow = ProfileFlow::Retrieve;
    page.profile_list.clear_filter();
    debug!("Profile page entered (epoch {})", page.epoch);
    UpdateResult::action(UpdateAction::LoadProfiles { epoch: page.epoch })
}

fn handle_loaded(page: &mut ProfilePageState, profiles: Vec<Profile>) {
    debug!("Loaded {} profiles", profiles.len());

    // Keep a picked profile in sync with a rename, drop it if it vanished
    if let ProfileFlow::List {
        current: Some(current),
    } = &page.flow
    {
        let refreshed = profiles.iter().find(|p| p.id == current.id).cloned();
        page.flow = ProfileFlow::List { current: refreshed };
    }

    page.set_profiles(profiles);
    if page.flow == ProfileFlow::Retrieve {
        page.flow = ProfileFlow::list();
        page.pane = ProfilePane::Profiles;
    }
}

fn handle_key(page: &mut ProfilePageState, key: InputKey) -> UpdateResult {
    if page.flow == ProfileFlow::Retrieve {
        return UpdateResult::none();
    }

    // A filter being typed owns the keyboard
    if page.pane == ProfilePane::Profiles && page.profile_list.is_filtering() {
        page.profile_list.handle_key(&key);
        return UpdateResult::none();
    }

    match key {
        InputKey::Tab => handle_tab(page, false),
        InputKey::BackTab => handle_tab(page, true),
        InputKey::Enter => return handle_enter(page),
        InputKey::Esc => handle_esc(page),
        other => handle_event(page, &other),
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Tab / Shift-Tab
// ─────────────────────────────────────────────────────────

/// Next form stage, and whether focus leaves for the profiles pane
fn step_form(stage: FormStage, back: bool) -> (FormStage, bool) {
    match (stage, back) {
        (FormStage::Name, false) => (FormStage::Confirm, false),
        (FormStage::Confirm, false) => (FormStage::Cancel, false),
        (FormStage::Cancel, false) => (FormStage::Name, true),
        (FormStage::Name, true) => (FormStage::Name, true),
        (FormStage::Confirm, true) => (FormStage::Name, false),
        (FormStage::Cancel, true) => (FormStage::Confirm, false),
    }
}

fn step_delete(stage: DeleteStage, back: bool) -> (DeleteStage, bool) {
    match (stage, back) {
        (DeleteStage::View, false) => (DeleteStage::Confirm, false),
        (DeleteStage::Confirm, false) => (DeleteStage::Cancel, false),
        (DeleteStage::Cancel, false) => (DeleteStage::View, true),
        (DeleteStage::View, true) => (DeleteStage::View, true),
        (DeleteStage::Confirm, true) => (DeleteStage::View, false),
        (DeleteStage::Cancel, true) => (DeleteStage::Confirm, false),
    }
}

fn handle_tab(page: &mut ProfilePageState, back: bool) {
    if page.pane == ProfilePane::Profiles {
        page.pane = ProfilePane::Actions;
        page.sync_focus();
        return;
    }

    match &mut page.flow {
        ProfileFlow::New { stage } | ProfileFlow::Update { stage, .. } => {
            let (next, leave) = step_form(*stage, back);
            *stage = next;
            if leave {
                page.pane = ProfilePane::Profiles;
                page.banner = None;
            }
        }
        ProfileFlow::Delete { stage, .. } => {
            let (next, leave) = step_delete(*stage, back);
            *stage = next;
            if leave {
                page.pane = ProfilePane::Profiles;
            }
        }
        _ => page.pane = ProfilePane::Profiles,
    }
    page.sync_focus();
}

// ─────────────────────────────────────────────────────────
// Enter
// ─────────────────────────────────────────────────────────

fn handle_enter(page: &mut ProfilePageState) -> UpdateResult {
    let result = match page.pane {
        ProfilePane::Profiles => {
            select_profile_item(page);
            UpdateResult::none()
        }
        ProfilePane::Actions => match page.flow.clone() {
            ProfileFlow::List { current } => choose_action(page, current),
            ProfileFlow::New { stage } => form_enter(page, None, stage),
            ProfileFlow::Update { target, stage } => form_enter(page, Some(target), stage),
            ProfileFlow::Delete { target, stage } => delete_enter(page, target, stage),
            ProfileFlow::Retrieve | ProfileFlow::View { .. } => UpdateResult::none(),
        },
    };
    page.sync_focus();
    result
}

fn select_profile_item(page: &mut ProfilePageState) {
    match page.profile_list.selected().cloned() {
        Some(ProfileItem::Add) => {
            page.flow = ProfileFlow::New {
                stage: FormStage::Name,
            };
            page.input.clear();
        }
        Some(ProfileItem::Profile(profile)) => {
            page.flow = ProfileFlow::List {
                current: Some(profile),
            };
            page.action_list.select_first();
        }
        None => {
            debug!("Enter on an empty profile list");
            return;
        }
    }
    page.banner = None;
    page.pane = ProfilePane::Actions;
}

fn choose_action(page: &mut ProfilePageState, current: Option<Profile>) -> UpdateResult {
    let Some(target) = current.or_else(|| page.highlighted_profile().cloned()) else {
        page.banner = Some(Banner::error(NO_PROFILE_SELECTED));
        return UpdateResult::none();
    };

    page.banner = None;
    match page.action_list.selected().copied() {
        Some(ProfileAction::View) => {
            page.flow = ProfileFlow::View {
                target: target.clone(),
            };
            UpdateResult::message(Message::Navigate(PageTransition::Details(target)))
        }
        Some(ProfileAction::Update) => {
            page.banner = Some(Banner::info(format!(
                "You are trying to update {} with a new name. Please follow the instructions below.",
                target.name
            )));
            page.input.clear();
            page.flow = ProfileFlow::Update {
                target,
                stage: FormStage::Name,
            };
            UpdateResult::none()
        }
        Some(ProfileAction::Delete) => {
            page.flow = ProfileFlow::Delete {
                target,
                stage: DeleteStage::View,
            };
            UpdateResult::none()
        }
        None => UpdateResult::none(),
    }
}

fn set_form_stage(page: &mut ProfilePageState, next: FormStage) {
    if let ProfileFlow::New { stage } | ProfileFlow::Update { stage, .. } = &mut page.flow {
        *stage = next;
    }
}

/// Enter inside the add/update form; `target` is the profile being renamed
fn form_enter(
    page: &mut ProfilePageState,
    target: Option<Profile>,
    stage: FormStage,
) -> UpdateResult {
    page.banner = None;
    match stage {
        FormStage::Name => {
            if page.input.value().trim().is_empty() {
                page.banner = Some(Banner::error(EMPTY_NAME));
            } else {
                set_form_stage(page, FormStage::Confirm);
            }
            UpdateResult::none()
        }
        FormStage::Confirm => {
            if page.pending {
                debug!("Profile save already in flight, ignoring confirm");
                return UpdateResult::none();
            }
            let name = page.input.value().trim().to_string();
            if name.is_empty() {
                page.banner = Some(Banner::error(EMPTY_NAME));
                set_form_stage(page, FormStage::Name);
                return UpdateResult::none();
            }
            if page.is_duplicate(&name, target.as_ref().map(|p| p.id)) {
                page.banner = Some(Banner::error(format!(
                    "The name {} is already taken. Try another name or update the existing one first!",
                    name
                )));
                set_form_stage(page, FormStage::Name);
                return UpdateResult::none();
            }

            let epoch = page.epoch;
            let action = match target {
                None => UpdateAction::AddProfile { epoch, name },
                Some(profile) => UpdateAction::UpdateProfile {
                    epoch,
                    profile,
                    name,
                },
            };
            page.reset();
            page.pending = true;
            UpdateResult::action(action)
        }
        FormStage::Cancel => {
            page.reset();
            UpdateResult::none()
        }
    }
}

fn delete_enter(page: &mut ProfilePageState, target: Profile, stage: DeleteStage) -> UpdateResult {
    match stage {
        DeleteStage::View => {
            page.flow = ProfileFlow::Delete {
                target,
                stage: DeleteStage::Confirm,
            };
            UpdateResult::none()
        }
        DeleteStage::Confirm => {
            if page.pending {
                debug!("Profile change already in flight, ignoring delete");
                return UpdateResult::none();
            }
            let epoch = page.epoch;
            page.reset();
            page.pending = true;
            UpdateResult::action(UpdateAction::DeleteProfile {
                epoch,
                profile: target,
            })
        }
        DeleteStage::Cancel => {
            page.reset();
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────
// Esc and other keys
// ─────────────────────────────────────────────────────────

fn handle_esc(page: &mut ProfilePageState) {
    page.reset();
    page.profile_list.clear_filter();
}

fn handle_event(page: &mut ProfilePageState, key: &InputKey) {
    match page.pane {
        ProfilePane::Profiles => {
            page.profile_list.handle_key(key);
        }
        ProfilePane::Actions => match &page.flow {
            ProfileFlow::List { .. } => {
                page.action_list.handle_key(key);
            }
            flow if flow.form_stage() == Some(FormStage::Name) => {
                page.input.handle_key(key);
            }
            _ => {}
        },
    }
}
