//! Detail workflow transitions

use tracing::{debug, info, trace};

use maggi_core::{DetailType, Profile};

use crate::banner::Banner;
use crate::detail::{
    DeleteStage, DetailAction, DetailFlow, DetailItem, DetailPageState, DetailPane, EditMode,
    EditStage,
};
use crate::input_key::InputKey;
use crate::issue::Issue;
use crate::message::{Message, PageTransition};

use super::{UpdateAction, UpdateResult};

const EMPTY_KEY: &str = "Please pass a valid key. You can exit flow by pressing <esc> if needed";
const EMPTY_VALUE: &str =
    "Please pass a valid value. You can exit flow by pressing <esc> if needed";
const NO_DETAIL_SELECTED: &str = "Select an entry from the alias or env list first";

/// Focus order of the add/update form
const EDIT_RING: [(DetailPane, EditStage); 6] = [
    (DetailPane::Env, EditStage::ChooseAction),
    (DetailPane::Display, EditStage::Key),
    (DetailPane::Display, EditStage::Value),
    (DetailPane::Action, EditStage::Confirm),
    (DetailPane::Action, EditStage::Cancel),
    (DetailPane::Alias, EditStage::ChooseAction),
];

/// Focus order of the delete confirmation
const DELETE_RING: [(DetailPane, DeleteStage); 5] = [
    (DetailPane::Env, DeleteStage::ChooseAction),
    (DetailPane::Display, DeleteStage::View),
    (DetailPane::Action, DeleteStage::Confirm),
    (DetailPane::Action, DeleteStage::Cancel),
    (DetailPane::Alias, DeleteStage::ChooseAction),
];

pub(crate) fn update(page: &mut DetailPageState, message: Message) -> UpdateResult {
    match message {
        Message::DetailStart { profile } => handle_start(page, profile),
        Message::DetailsLoaded { epoch, details } => {
            if is_stale(page, epoch) {
                return UpdateResult::none();
            }
            debug!("Loaded {} details", details.len());
            page.set_details(details);
            if page.flow == DetailFlow::Retrieve {
                page.reset_to_list(DetailType::Env);
            }
            UpdateResult::none()
        }
        Message::DetailSaved { epoch, detail } => {
            if is_stale(page, epoch) {
                return UpdateResult::none();
            }
            info!("{} {} saved", detail.kind.label(), detail.key);
            finish_write(page, detail.kind)
        }
        Message::DetailDeleted { epoch, detail } => {
            if is_stale(page, epoch) {
                return UpdateResult::none();
            }
            info!("{} {} deleted", detail.kind.label(), detail.key);
            finish_write(page, detail.kind)
        }
        Message::Key(key) => handle_key(page, key),
        other => {
            trace!("Detail page ignoring {:?}", other);
            UpdateResult::none()
        }
    }
}

fn is_stale(page: &DetailPageState, epoch: u64) -> bool {
    if epoch != page.epoch {
        debug!(
            "Dropping stale detail result (epoch {}, current {})",
            epoch, page.epoch
        );
        return true;
    }
    false
}

fn handle_start(page: &mut DetailPageState, profile: Profile) -> UpdateResult {
    page.epoch += 1;
    let profile_id = profile.id;
    debug!(
        "Detail page entered for {} (epoch {})",
        profile.name, page.epoch
    );

    page.profile = Some(profile);
    page.set_details(Vec::new());
    page.reset_to_list(DetailType::Env);
    page.flow = DetailFlow::Retrieve;
    page.pending = false;

    UpdateResult::action(UpdateAction::LoadDetails {
        epoch: page.epoch,
        profile_id,
    })
}

/// Reload after a save or delete, landing on the edited type's list
fn finish_write(page: &mut DetailPageState, kind: DetailType) -> UpdateResult {
    page.pending = false;
    page.reset_to_list(kind);
    match &page.profile {
        Some(profile) => UpdateResult::action(UpdateAction::LoadDetails {
            epoch: page.epoch,
            profile_id: profile.id,
        }),
        None => UpdateResult::none(),
    }
}

fn handle_key(page: &mut DetailPageState, key: InputKey) -> UpdateResult {
    if page.flow == DetailFlow::Retrieve {
        return UpdateResult::none();
    }

    // A filter being typed owns the keyboard
    if let Some(kind) = page.pane.kind() {
        if page.list(kind).is_filtering() {
            page.list_mut(kind).handle_key(&key);
            if page.flow.is_browsing() {
                page.sync_selection(kind);
            }
            return UpdateResult::none();
        }
    }

    let result = match key {
        InputKey::Tab => {
            handle_tab(page, false);
            UpdateResult::none()
        }
        InputKey::BackTab => {
            handle_tab(page, true);
            UpdateResult::none()
        }
        InputKey::Enter => handle_enter(page),
        InputKey::Esc => handle_esc(page),
        other => {
            handle_event(page, &other);
            UpdateResult::none()
        }
    };
    page.sync_focus();
    result
}

// ─────────────────────────────────────────────────────────
// Tab / Shift-Tab
// ─────────────────────────────────────────────────────────

/// Step through a focus ring. Side list panes match on the pane alone.
fn step_ring<S: Copy + PartialEq>(
    ring: &[(DetailPane, S)],
    pane: DetailPane,
    stage: S,
    back: bool,
) -> (DetailPane, S) {
    let position = ring
        .iter()
        .position(|&(p, s)| p == pane && (pane.kind().is_some() || s == stage))
        .unwrap_or(0);
    let len = ring.len();
    let next = if back {
        (position + len - 1) % len
    } else {
        (position + 1) % len
    };
    ring[next]
}

fn handle_tab(page: &mut DetailPageState, back: bool) {
    match page.flow {
        DetailFlow::Retrieve => {}
        DetailFlow::List | DetailFlow::View => browse_tab(page, back),
        DetailFlow::Edit { mode, stage } => {
            let (pane, stage) = step_ring(&EDIT_RING, page.pane, stage, back);
            page.flow = DetailFlow::Edit { mode, stage };
            page.pane = pane;
            if pane.kind().is_some() {
                page.banner = None;
            }
        }
        DetailFlow::Delete { stage } => {
            let (pane, stage) = step_ring(&DELETE_RING, page.pane, stage, back);
            page.flow = DetailFlow::Delete { stage };
            page.pane = pane;
            if pane.kind().is_some() {
                page.banner = None;
            }
        }
    }
}

/// Env -> Display -> Action -> Alias -> Env, skipping the middle panes
/// while nothing is on display
fn browse_tab(page: &mut DetailPageState, back: bool) {
    let empty = page.empty_display;
    let next = match (page.pane, back) {
        (DetailPane::Env, false) if empty => DetailPane::Alias,
        (DetailPane::Env, false) => DetailPane::Display,
        (DetailPane::Display, false) => DetailPane::Action,
        (DetailPane::Action, false) => DetailPane::Alias,
        (DetailPane::Alias, false) => DetailPane::Env,
        (DetailPane::Env, true) => DetailPane::Alias,
        (DetailPane::Alias, true) if empty => DetailPane::Env,
        (DetailPane::Alias, true) => DetailPane::Action,
        (DetailPane::Action, true) => DetailPane::Display,
        (DetailPane::Display, true) => DetailPane::Env,
    };
    page.pane = next;
    if let Some(kind) = next.kind() {
        page.sync_selection(kind);
    }
}

// ─────────────────────────────────────────────────────────
// Enter
// ─────────────────────────────────────────────────────────

fn handle_enter(page: &mut DetailPageState) -> UpdateResult {
    match page.pane {
        DetailPane::Env | DetailPane::Alias => {
            select_side_item(page);
            UpdateResult::none()
        }
        DetailPane::Display => {
            display_enter(page);
            UpdateResult::none()
        }
        DetailPane::Action => action_enter(page),
    }
}

fn select_side_item(page: &mut DetailPageState) {
    let Some(kind) = page.pane.kind() else {
        return;
    };
    let Some(item) = page.list(kind).selected().cloned() else {
        debug!("Enter on an empty {} list", kind.as_str());
        return;
    };

    page.set_kind(kind);
    page.banner = None;
    page.clear_inputs();
    page.pane = DetailPane::Display;
    match item {
        DetailItem::Add(_) => {
            page.flow = DetailFlow::Edit {
                mode: EditMode::New,
                stage: EditStage::Key,
            };
            page.current = None;
            page.empty_display = true;
        }
        DetailItem::Detail(detail) => {
            page.flow = DetailFlow::View;
            page.current = Some(detail);
            page.empty_display = false;
        }
    }
}

fn display_enter(page: &mut DetailPageState) {
    match page.flow {
        DetailFlow::List | DetailFlow::View => {
            if !page.empty_display {
                page.pane = DetailPane::Action;
                page.action_list.select_first();
            }
        }
        DetailFlow::Edit {
            mode,
            stage: EditStage::Key,
        } => {
            if validate(page, false).is_some() {
                page.banner = None;
                page.flow = DetailFlow::Edit {
                    mode,
                    stage: EditStage::Value,
                };
            }
        }
        DetailFlow::Edit {
            mode,
            stage: EditStage::Value,
        } => {
            if validate(page, true).is_some() {
                page.banner = None;
                page.flow = DetailFlow::Edit {
                    mode,
                    stage: EditStage::Confirm,
                };
                page.pane = DetailPane::Action;
            }
        }
        DetailFlow::Delete {
            stage: DeleteStage::View,
        } => {
            page.flow = DetailFlow::Delete {
                stage: DeleteStage::Confirm,
            };
            page.pane = DetailPane::Action;
        }
        _ => {}
    }
}

fn action_enter(page: &mut DetailPageState) -> UpdateResult {
    match page.flow {
        DetailFlow::List | DetailFlow::View => {
            choose_action(page);
            UpdateResult::none()
        }
        DetailFlow::Edit {
            mode,
            stage: EditStage::Confirm,
        } => confirm_edit(page, mode),
        DetailFlow::Delete {
            stage: DeleteStage::Confirm,
        } => confirm_delete(page),
        DetailFlow::Edit {
            stage: EditStage::Cancel,
            ..
        }
        | DetailFlow::Delete {
            stage: DeleteStage::Cancel,
        } => {
            let kind = page.kind;
            page.reset_to_list(kind);
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}

fn choose_action(page: &mut DetailPageState) {
    let Some(current) = page.current.clone() else {
        page.banner = Some(Banner::error(NO_DETAIL_SELECTED));
        return;
    };
    page.banner = None;

    match page.action_list.selected().copied() {
        Some(DetailAction::Update(_)) => {
            page.key_input.set_value(&current.key);
            page.value_input.set_value(&current.value);
            page.flow = DetailFlow::Edit {
                mode: EditMode::Update,
                stage: EditStage::Key,
            };
            page.pane = DetailPane::Display;
        }
        Some(DetailAction::Delete(_)) => {
            page.flow = DetailFlow::Delete {
                stage: DeleteStage::View,
            };
            page.pane = DetailPane::Display;
        }
        None => {}
    }
}

/// Check the form; on failure flag it and send focus back to the key
fn validate(page: &mut DetailPageState, with_value: bool) -> Option<(String, String)> {
    let key = page.key_input.value().trim().to_string();
    let value = page.value_input.value().trim().to_string();

    let problem = if key.is_empty() {
        Some(EMPTY_KEY.to_string())
    } else if page.is_duplicate_key(&key, page.editing_id()) {
        Some(format!(
            "Key {} already exists in profile. You can <esc> to edit or delete the existing entry before creating a new one!",
            key
        ))
    } else if with_value && value.is_empty() {
        Some(EMPTY_VALUE.to_string())
    } else {
        None
    };

    match problem {
        Some(message) => {
            page.banner = Some(Banner::error(message));
            if let DetailFlow::Edit { mode, .. } = page.flow {
                page.flow = DetailFlow::Edit {
                    mode,
                    stage: EditStage::Key,
                };
            }
            page.pane = DetailPane::Display;
            None
        }
        None => Some((key, value)),
    }
}

fn confirm_edit(page: &mut DetailPageState, mode: EditMode) -> UpdateResult {
    if page.pending {
        debug!("Save already in flight, ignoring confirm");
        return UpdateResult::none();
    }
    let Some((key, value)) = validate(page, true) else {
        return UpdateResult::none();
    };
    let Some(profile_id) = page.profile.as_ref().map(|p| p.id) else {
        return missing_profile();
    };

    let epoch = page.epoch;
    let action = match (mode, page.current.clone()) {
        (EditMode::Update, Some(detail)) => UpdateAction::UpdateDetail {
            epoch,
            detail,
            key,
            value,
        },
        (EditMode::Update, None) => {
            return UpdateResult::message(Message::ShowIssue(Issue::new(
                "Internal error: no detail selected for update",
            )));
        }
        (EditMode::New, _) => UpdateAction::AddDetail {
            epoch,
            key,
            value,
            kind: page.kind,
            profile_id,
        },
    };
    page.banner = None;
    page.pending = true;
    UpdateResult::action(action)
}

fn confirm_delete(page: &mut DetailPageState) -> UpdateResult {
    if page.pending {
        debug!("Delete already in flight, ignoring confirm");
        return UpdateResult::none();
    }
    let Some(detail) = page.current.clone() else {
        return UpdateResult::message(Message::ShowIssue(Issue::new(
            "Internal error: no detail selected for delete",
        )));
    };
    page.pending = true;
    UpdateResult::action(UpdateAction::DeleteDetail {
        epoch: page.epoch,
        detail,
    })
}

fn missing_profile() -> UpdateResult {
    UpdateResult::message(Message::ShowIssue(Issue::new(
        "Internal error: detail page has no profile",
    )))
}

// ─────────────────────────────────────────────────────────
// Esc and other keys
// ─────────────────────────────────────────────────────────

fn handle_esc(page: &mut DetailPageState) -> UpdateResult {
    if page.flow == DetailFlow::List {
        return UpdateResult::message(Message::Navigate(PageTransition::Profiles));
    }
    page.reset_to_list(DetailType::Env);
    UpdateResult::none()
}

fn handle_event(page: &mut DetailPageState, key: &InputKey) {
    match page.pane {
        DetailPane::Env | DetailPane::Alias => {
            let Some(kind) = page.pane.kind() else {
                return;
            };
            page.list_mut(kind).handle_key(key);
            if page.flow.is_browsing() {
                page.sync_selection(kind);
            }
        }
        DetailPane::Display => match page.flow {
            DetailFlow::Edit {
                stage: EditStage::Key,
                ..
            } => {
                page.key_input.handle_key(key);
            }
            DetailFlow::Edit {
                stage: EditStage::Value,
                ..
            } => {
                page.value_input.handle_key(key);
            }
            _ => {}
        },
        DetailPane::Action => {
            if page.flow.is_browsing() {
                page.action_list.handle_key(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maggi_core::Detail;

    fn profile() -> Profile {
        Profile::new(1, "dev")
    }

    fn loaded(details: Vec<Detail>) -> DetailPageState {
        let mut page = DetailPageState::new(false);
        let _ = update(&mut page, Message::DetailStart { profile: profile() });
        let epoch = page.epoch;
        let _ = update(&mut page, Message::DetailsLoaded { epoch, details });
        page
    }

    fn sample() -> Vec<Detail> {
        vec![
            Detail::new(1, "EDITOR", "vim", DetailType::Env, 1),
            Detail::new(2, "X", "ls", DetailType::Alias, 1),
        ]
    }

    fn key(page: &mut DetailPageState, key: InputKey) -> UpdateResult {
        update(page, Message::Key(key))
    }

    fn type_text(page: &mut DetailPageState, text: &str) {
        for c in text.chars() {
            key(page, InputKey::Char(c));
        }
    }

    #[test]
    fn test_start_requests_details() {
        let mut page = DetailPageState::new(false);
        let result = update(&mut page, Message::DetailStart { profile: profile() });
        assert_eq!(page.flow, DetailFlow::Retrieve);
        assert_eq!(
            result.action,
            Some(UpdateAction::LoadDetails {
                epoch: 1,
                profile_id: 1
            })
        );
    }

    #[test]
    fn test_loaded_enters_env_list() {
        let page = loaded(sample());
        assert_eq!(page.flow, DetailFlow::List);
        assert_eq!(page.pane, DetailPane::Env);
        assert!(page.empty_display);
    }

    #[test]
    fn test_stale_details_dropped() {
        let mut page = loaded(sample());
        let _ = update(
            &mut page,
            Message::DetailsLoaded {
                epoch: 0,
                details: Vec::new(),
            },
        );
        assert_eq!(page.details.len(), 2);
    }

    #[test]
    fn test_tab_skips_display_when_empty() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Tab);
        assert_eq!(page.pane, DetailPane::Alias);
        key(&mut page, InputKey::Tab);
        assert_eq!(page.pane, DetailPane::Env);
    }

    #[test]
    fn test_tab_visits_display_and_action_with_selection() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Down);
        assert!(!page.empty_display);

        key(&mut page, InputKey::Tab);
        assert_eq!(page.pane, DetailPane::Display);
        key(&mut page, InputKey::Tab);
        assert_eq!(page.pane, DetailPane::Action);
        key(&mut page, InputKey::BackTab);
        assert_eq!(page.pane, DetailPane::Display);
        key(&mut page, InputKey::BackTab);
        assert_eq!(page.pane, DetailPane::Env);
    }

    #[test]
    fn test_select_real_item_views_it() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Down);
        key(&mut page, InputKey::Enter);
        assert_eq!(page.flow, DetailFlow::View);
        assert_eq!(page.pane, DetailPane::Display);
        assert_eq!(page.current.as_ref().map(|d| d.key.as_str()), Some("EDITOR"));
        assert!(!page.empty_display);
    }

    #[test]
    fn test_add_env_happy_path() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Enter);
        assert_eq!(
            page.flow,
            DetailFlow::Edit {
                mode: EditMode::New,
                stage: EditStage::Key
            }
        );
        assert!(page.key_input.is_focused());

        type_text(&mut page, "PAGER");
        key(&mut page, InputKey::Enter);
        assert!(page.value_input.is_focused());
        type_text(&mut page, "less");
        key(&mut page, InputKey::Enter);
        assert_eq!(page.pane, DetailPane::Action);

        let result = key(&mut page, InputKey::Enter);
        assert_eq!(
            result.action,
            Some(UpdateAction::AddDetail {
                epoch: page.epoch,
                key: "PAGER".to_string(),
                value: "less".to_string(),
                kind: DetailType::Env,
                profile_id: 1,
            })
        );
        assert!(page.pending);
    }

    #[test]
    fn test_add_alias_tags_alias_type() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Tab);
        key(&mut page, InputKey::Enter);
        type_text(&mut page, "gs");
        key(&mut page, InputKey::Enter);
        type_text(&mut page, "git status");
        key(&mut page, InputKey::Enter);
        let result = key(&mut page, InputKey::Enter);

        match result.action {
            Some(UpdateAction::AddDetail { kind, key, .. }) => {
                assert_eq!(kind, DetailType::Alias);
                assert_eq!(key, "gs");
            }
            other => panic!("expected AddDetail, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_key_across_types_rejected() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Enter);
        type_text(&mut page, "X");
        let result = key(&mut page, InputKey::Enter);

        assert!(result.action.is_none());
        assert_eq!(
            page.flow,
            DetailFlow::Edit {
                mode: EditMode::New,
                stage: EditStage::Key
            }
        );
        let banner = page.banner.clone().unwrap();
        assert!(banner.is_error());
        assert!(banner.message.contains("Key X already exists"));
    }

    #[test]
    fn test_empty_value_sends_focus_back_to_key() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Enter);
        type_text(&mut page, "PAGER");
        key(&mut page, InputKey::Enter);
        key(&mut page, InputKey::Enter);

        assert_eq!(
            page.flow,
            DetailFlow::Edit {
                mode: EditMode::New,
                stage: EditStage::Key
            }
        );
        assert!(page.key_input.is_focused());
        assert!(page.banner.unwrap().message.contains("valid value"));
    }

    #[test]
    fn test_confirm_ignored_while_pending() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Enter);
        type_text(&mut page, "A");
        key(&mut page, InputKey::Enter);
        type_text(&mut page, "1");
        key(&mut page, InputKey::Enter);
        assert!(key(&mut page, InputKey::Enter).action.is_some());
        assert!(key(&mut page, InputKey::Enter).action.is_none());
    }

    #[test]
    fn test_update_prefills_and_keeps_own_key() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Down);
        key(&mut page, InputKey::Enter);
        key(&mut page, InputKey::Enter);
        assert_eq!(page.pane, DetailPane::Action);
        key(&mut page, InputKey::Enter);

        assert_eq!(page.key_input.value(), "EDITOR");
        assert_eq!(page.value_input.value(), "vim");

        key(&mut page, InputKey::Enter);
        key(&mut page, InputKey::Char('m'));
        key(&mut page, InputKey::Enter);
        let result = key(&mut page, InputKey::Enter);

        assert_eq!(
            result.action,
            Some(UpdateAction::UpdateDetail {
                epoch: page.epoch,
                detail: Detail::new(1, "EDITOR", "vim", DetailType::Env, 1),
                key: "EDITOR".to_string(),
                value: "vimm".to_string(),
            })
        );
    }

    #[test]
    fn test_delete_flow() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Down);
        key(&mut page, InputKey::Enter);
        key(&mut page, InputKey::Enter);
        key(&mut page, InputKey::Down);
        key(&mut page, InputKey::Enter);
        assert_eq!(
            page.flow,
            DetailFlow::Delete {
                stage: DeleteStage::View
            }
        );

        key(&mut page, InputKey::Enter);
        let result = key(&mut page, InputKey::Enter);
        assert!(matches!(
            result.action,
            Some(UpdateAction::DeleteDetail { detail, .. }) if detail.id == 1
        ));
    }

    #[test]
    fn test_edit_tab_ring() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Enter);

        key(&mut page, InputKey::Tab);
        assert!(page.value_input.is_focused());
        key(&mut page, InputKey::Tab);
        assert_eq!(page.pane, DetailPane::Action);
        key(&mut page, InputKey::Tab);
        assert_eq!(
            page.flow,
            DetailFlow::Edit {
                mode: EditMode::New,
                stage: EditStage::Cancel
            }
        );
        key(&mut page, InputKey::Tab);
        assert_eq!(page.pane, DetailPane::Alias);
        key(&mut page, InputKey::Tab);
        assert_eq!(page.pane, DetailPane::Env);
        key(&mut page, InputKey::Tab);
        assert!(page.key_input.is_focused());

        key(&mut page, InputKey::BackTab);
        assert_eq!(page.pane, DetailPane::Env);
        key(&mut page, InputKey::BackTab);
        assert_eq!(page.pane, DetailPane::Alias);
    }

    #[test]
    fn test_cancel_returns_to_list() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Enter);
        type_text(&mut page, "A");
        key(&mut page, InputKey::BackTab);
        key(&mut page, InputKey::BackTab);
        key(&mut page, InputKey::BackTab);
        assert_eq!(
            page.flow,
            DetailFlow::Edit {
                mode: EditMode::New,
                stage: EditStage::Cancel
            }
        );
        let result = key(&mut page, InputKey::Enter);
        assert!(result.action.is_none());
        assert_eq!(page.flow, DetailFlow::List);
        assert_eq!(page.key_input.value(), "");
    }

    #[test]
    fn test_esc_in_list_returns_to_profiles() {
        let mut page = loaded(sample());
        let result = key(&mut page, InputKey::Esc);
        assert!(matches!(
            result.message,
            Some(Message::Navigate(PageTransition::Profiles))
        ));
        assert_eq!(page.flow, DetailFlow::List);
    }

    #[test]
    fn test_esc_in_flow_resets_to_env_list() {
        let mut page = loaded(sample());
        key(&mut page, InputKey::Tab);
        key(&mut page, InputKey::Enter);
        type_text(&mut page, "gs");

        let result = key(&mut page, InputKey::Esc);
        assert!(result.message.is_none());
        assert_eq!(page.flow, DetailFlow::List);
        assert_eq!(page.pane, DetailPane::Env);
        assert_eq!(page.key_input.value(), "");
        assert!(page.banner.is_none());
    }

    #[test]
    fn test_saved_resets_to_edited_type_and_reloads() {
        let mut page = loaded(sample());
        page.pending = true;
        let epoch = page.epoch;
        let result = update(
            &mut page,
            Message::DetailSaved {
                epoch,
                detail: Detail::new(3, "gs", "git status", DetailType::Alias, 1),
            },
        );
        assert!(!page.pending);
        assert_eq!(page.pane, DetailPane::Alias);
        assert_eq!(
            result.action,
            Some(UpdateAction::LoadDetails {
                epoch,
                profile_id: 1
            })
        );
    }

    #[test]
    fn test_action_without_selection_sets_banner() {
        let mut page = loaded(sample());
        page.pane = DetailPane::Action;
        key(&mut page, InputKey::Enter);
        assert!(page.banner.unwrap().is_error());
    }
}
