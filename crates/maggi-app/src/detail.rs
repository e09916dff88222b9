//! Detail page state: one profile's aliases and env vars

use maggi_core::{Detail, DetailType, Profile};

use crate::banner::Banner;
use crate::list::{ListItem, SelectList};
use crate::text_input::TextInput;

/// Region holding input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPane {
    #[default]
    Env,
    Alias,
    /// Key/value display or form
    Display,
    /// Action menu or confirm/cancel buttons
    Action,
}

impl DetailPane {
    /// The side list pane showing details of `kind`
    pub fn for_kind(kind: DetailType) -> Self {
        match kind {
            DetailType::Env => DetailPane::Env,
            DetailType::Alias => DetailPane::Alias,
        }
    }

    /// The detail type of a side list pane
    pub fn kind(self) -> Option<DetailType> {
        match self {
            DetailPane::Env => Some(DetailType::Env),
            DetailPane::Alias => Some(DetailType::Alias),
            DetailPane::Display | DetailPane::Action => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    New,
    Update,
}

/// Steps of the add/update form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditStage {
    /// Focus is on a side list
    #[default]
    ChooseAction,
    Key,
    Value,
    Confirm,
    Cancel,
}

/// Steps of the delete confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteStage {
    /// Focus is on a side list
    #[default]
    ChooseAction,
    View,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFlow {
    /// Waiting for the initial load
    #[default]
    Retrieve,
    List,
    View,
    Edit { mode: EditMode, stage: EditStage },
    Delete { stage: DeleteStage },
}

impl DetailFlow {
    /// List and view share navigation rules
    pub fn is_browsing(&self) -> bool {
        matches!(self, DetailFlow::List | DetailFlow::View)
    }
}

/// Row of the Env or Alias side list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailItem {
    Detail(Detail),
    /// Synthetic entry that starts the new-detail flow
    Add(DetailType),
}

impl ListItem for DetailItem {
    fn label(&self) -> String {
        match self {
            DetailItem::Detail(detail) => detail.key.clone(),
            DetailItem::Add(DetailType::Alias) => "Add alias...".to_string(),
            DetailItem::Add(DetailType::Env) => "Add env var...".to_string(),
        }
    }

    fn filter_value(&self) -> String {
        match self {
            DetailItem::Detail(detail) => detail.key.clone(),
            DetailItem::Add(_) => String::new(),
        }
    }
}

/// Row of the action menu, labelled for the selected detail's type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Update(DetailType),
    Delete(DetailType),
}

impl DetailAction {
    pub fn menu(kind: DetailType) -> Vec<DetailAction> {
        vec![DetailAction::Update(kind), DetailAction::Delete(kind)]
    }
}

impl ListItem for DetailAction {
    fn label(&self) -> String {
        match self {
            DetailAction::Update(kind) => format!("Update {}", kind.label()),
            DetailAction::Delete(kind) => format!("Delete {}", kind.label()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailPageState {
    /// Profile whose details are shown; threaded in by the router
    pub profile: Option<Profile>,
    pub flow: DetailFlow,
    pub pane: DetailPane,
    /// Type being viewed or added; picks the side list and the menu labels
    pub kind: DetailType,
    /// True while the display pane has nothing to show
    pub empty_display: bool,
    pub current: Option<Detail>,
    pub details: Vec<Detail>,
    pub env_list: SelectList<DetailItem>,
    pub alias_list: SelectList<DetailItem>,
    pub action_list: SelectList<DetailAction>,
    pub key_input: TextInput,
    pub value_input: TextInput,
    pub banner: Option<Banner>,
    /// Set while a save or delete is in flight
    pub pending: bool,
    /// Bumped on every page entry; results from older epochs are stale
    pub epoch: u64,
    pub width: u16,
    pub height: u16,
}

impl DetailPageState {
    pub fn new(filterable: bool) -> Self {
        Self {
            profile: None,
            flow: DetailFlow::Retrieve,
            pane: DetailPane::Env,
            kind: DetailType::Env,
            empty_display: true,
            current: None,
            details: Vec::new(),
            env_list: SelectList::new(vec![DetailItem::Add(DetailType::Env)], filterable),
            alias_list: SelectList::new(vec![DetailItem::Add(DetailType::Alias)], filterable),
            action_list: SelectList::new(DetailAction::menu(DetailType::Env), false),
            key_input: TextInput::new("KEY"),
            value_input: TextInput::new("value"),
            banner: None,
            pending: false,
            epoch: 0,
            width: 0,
            height: 0,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let rows = height.saturating_sub(8) / 2;
        self.env_list.set_height(rows);
        self.alias_list.set_height(rows);
        self.action_list.set_height(rows);
    }

    /// Store the loaded details and partition them into the side lists
    pub fn set_details(&mut self, details: Vec<Detail>) {
        let (aliases, envs): (Vec<_>, Vec<_>) = details
            .iter()
            .cloned()
            .partition(|d| d.kind == DetailType::Alias);

        let env_items = std::iter::once(DetailItem::Add(DetailType::Env))
            .chain(envs.into_iter().map(DetailItem::Detail))
            .collect();
        let alias_items = std::iter::once(DetailItem::Add(DetailType::Alias))
            .chain(aliases.into_iter().map(DetailItem::Detail))
            .collect();

        self.details = details;
        self.env_list.set_items(env_items);
        self.alias_list.set_items(alias_items);
    }

    pub fn list(&self, kind: DetailType) -> &SelectList<DetailItem> {
        match kind {
            DetailType::Env => &self.env_list,
            DetailType::Alias => &self.alias_list,
        }
    }

    pub fn list_mut(&mut self, kind: DetailType) -> &mut SelectList<DetailItem> {
        match kind {
            DetailType::Env => &mut self.env_list,
            DetailType::Alias => &mut self.alias_list,
        }
    }

    /// Switch the active type, relabelling the action menu
    pub fn set_kind(&mut self, kind: DetailType) {
        if self.kind != kind {
            self.kind = kind;
            self.action_list.set_items(DetailAction::menu(kind));
        }
    }

    /// Mirror the highlighted side list row into the display pane
    pub fn sync_selection(&mut self, kind: DetailType) {
        self.set_kind(kind);
        match self.list(kind).selected().cloned() {
            Some(DetailItem::Detail(detail)) => {
                self.current = Some(detail);
                self.empty_display = false;
            }
            Some(DetailItem::Add(_)) | None => {
                self.current = None;
                self.empty_display = true;
            }
        }
    }

    /// Key collision within the profile, ignoring the detail being updated
    pub fn is_duplicate_key(&self, key: &str, exclude_id: Option<i64>) -> bool {
        self.details
            .iter()
            .any(|d| d.key == key && Some(d.id) != exclude_id)
    }

    /// Id of the detail being edited, for the duplicate check
    pub fn editing_id(&self) -> Option<i64> {
        match self.flow {
            DetailFlow::Edit {
                mode: EditMode::Update,
                ..
            } => self.current.as_ref().map(|d| d.id),
            _ => None,
        }
    }

    pub fn clear_inputs(&mut self) {
        self.key_input.clear();
        self.value_input.clear();
    }

    /// Back to browsing with focus on the side list of `kind`
    pub fn reset_to_list(&mut self, kind: DetailType) {
        self.flow = DetailFlow::List;
        self.pane = DetailPane::for_kind(kind);
        self.set_kind(kind);
        self.current = None;
        self.empty_display = true;
        self.banner = None;
        self.clear_inputs();
        self.env_list.clear_filter();
        self.alias_list.clear_filter();
        self.list_mut(kind).select_first();
        self.sync_focus();
    }

    /// Keep the text cursor on whichever input the stage edits
    pub fn sync_focus(&mut self) {
        let stage = match self.flow {
            DetailFlow::Edit { stage, .. } if self.pane == DetailPane::Display => Some(stage),
            _ => None,
        };
        if stage == Some(EditStage::Key) {
            self.key_input.focus();
        } else {
            self.key_input.blur();
        }
        if stage == Some(EditStage::Value) {
            self.value_input.focus();
        } else {
            self.value_input.blur();
        }
    }

    /// Page header title
    pub fn title(&self) -> String {
        let name = self
            .profile
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or_default();
        match self.flow {
            DetailFlow::Edit {
                mode: EditMode::New,
                ..
            } => format!(" {} | New {} ", name, self.kind.label()),
            DetailFlow::Edit {
                mode: EditMode::Update,
                ..
            } => format!(" {} | Update {} ", name, self.kind.label()),
            DetailFlow::Delete { .. } => format!(" {} | Delete {} ", name, self.kind.label()),
            _ => format!(" {} ", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Detail> {
        vec![
            Detail::new(1, "EDITOR", "vim", DetailType::Env, 1),
            Detail::new(2, "ll", "ls -la", DetailType::Alias, 1),
            Detail::new(3, "PAGER", "less", DetailType::Env, 1),
        ]
    }

    #[test]
    fn test_partition_by_type_with_add_first() {
        let mut page = DetailPageState::new(false);
        page.set_details(sample());

        let env: Vec<_> = page.env_list.visible_items().map(|i| i.label()).collect();
        assert_eq!(env, vec!["Add env var...", "EDITOR", "PAGER"]);

        let alias: Vec<_> = page.alias_list.visible_items().map(|i| i.label()).collect();
        assert_eq!(alias, vec!["Add alias...", "ll"]);
    }

    #[test]
    fn test_partition_recomputed_on_reload() {
        let mut page = DetailPageState::new(false);
        page.set_details(sample());
        page.set_details(vec![Detail::new(2, "ll", "ls -la", DetailType::Alias, 1)]);
        assert_eq!(page.env_list.visible_len(), 1);
        assert_eq!(page.alias_list.visible_len(), 2);
    }

    #[test]
    fn test_duplicate_key_spans_both_types() {
        let mut page = DetailPageState::new(false);
        page.set_details(sample());
        assert!(page.is_duplicate_key("ll", None));
        assert!(page.is_duplicate_key("EDITOR", None));
        assert!(!page.is_duplicate_key("editor", None));
        assert!(!page.is_duplicate_key("EDITOR", Some(1)));
    }

    #[test]
    fn test_action_labels_follow_kind() {
        let mut page = DetailPageState::new(false);
        page.set_kind(DetailType::Alias);
        let labels: Vec<_> = page.action_list.visible_items().map(|i| i.label()).collect();
        assert_eq!(labels, vec!["Update Alias", "Delete Alias"]);
    }

    #[test]
    fn test_sync_selection_tracks_highlight() {
        let mut page = DetailPageState::new(false);
        page.set_details(sample());

        page.sync_selection(DetailType::Env);
        assert!(page.empty_display);
        assert!(page.current.is_none());

        page.env_list.navigate_down();
        page.sync_selection(DetailType::Env);
        assert!(!page.empty_display);
        assert_eq!(page.current.as_ref().map(|d| d.id), Some(1));
    }
}
