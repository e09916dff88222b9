//! Selectable, optionally filterable list used by every workflow pane
//!
//! Items render through [`ListItem::label`]. Items whose
//! [`ListItem::filter_value`] is empty are placeholders (the "Add ..."
//! entries): they never match a filter and disappear while one is active.

use crate::input_key::InputKey;

/// Rows the list assumes visible until the first resize arrives
const DEFAULT_HEIGHT: usize = 10;

/// An entry that can live in a [`SelectList`]
pub trait ListItem {
    /// Display string for the row
    fn label(&self) -> String;

    /// Text matched against the filter; empty marks a placeholder
    fn filter_value(&self) -> String {
        self.label()
    }
}

/// Filter lifecycle: typed while `Editing`, kept after Enter as `Applied`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Off,
    Editing(String),
    Applied(String),
}

impl FilterState {
    pub fn query(&self) -> Option<&str> {
        match self {
            FilterState::Off => None,
            FilterState::Editing(q) | FilterState::Applied(q) => Some(q),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectList<T> {
    /// All items in display order
    items: Vec<T>,

    /// Indices of items matching the filter (into `items`)
    visible: Vec<usize>,

    /// Highlighted index (into `visible`)
    selected: usize,

    /// First visible row
    scroll_offset: usize,

    height: usize,
    filterable: bool,
    filter: FilterState,
}

impl<T: ListItem> SelectList<T> {
    pub fn new(items: Vec<T>, filterable: bool) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            visible,
            selected: 0,
            scroll_offset: 0,
            height: DEFAULT_HEIGHT,
            filterable,
            filter: FilterState::Off,
        }
    }

    /// Replace the backing items, keeping the highlight position where possible
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let selected = self.selected;
        self.apply_filter();
        self.selected = selected.min(self.visible.len().saturating_sub(1));
        self.adjust_scroll();
    }

    /// Rows available for items
    pub fn set_height(&mut self, height: u16) {
        self.height = usize::from(height).max(1);
        self.adjust_scroll();
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// The highlighted item, if any row is visible
    pub fn selected(&self) -> Option<&T> {
        self.visible
            .get(self.selected)
            .and_then(|&idx| self.items.get(idx))
    }

    /// Highlighted row index among the visible rows
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Visible rows in order, after filtering
    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.visible.iter().filter_map(|&idx| self.items.get(idx))
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.adjust_scroll();
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.adjust_scroll();
    }

    pub fn navigate_down(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
        self.adjust_scroll();
    }

    fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.height);
        self.adjust_scroll();
    }

    fn page_down(&mut self) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = (self.selected + self.height).min(last);
        self.adjust_scroll();
    }

    fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
        self.adjust_scroll();
    }

    fn adjust_scroll(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + self.height {
            self.scroll_offset = self.selected + 1 - self.height;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// True while the filter query is being typed
    pub fn is_filtering(&self) -> bool {
        matches!(self.filter, FilterState::Editing(_))
    }

    pub fn start_filter(&mut self) {
        if self.filterable {
            let query = self.filter.query().unwrap_or_default().to_string();
            self.filter = FilterState::Editing(query);
            self.update_filter();
        }
    }

    pub fn clear_filter(&mut self) {
        self.filter = FilterState::Off;
        self.update_filter();
    }

    fn input_char(&mut self, c: char) {
        if let FilterState::Editing(query) = &mut self.filter {
            query.push(c);
        }
        self.update_filter();
    }

    fn backspace(&mut self) {
        if let FilterState::Editing(query) = &mut self.filter {
            query.pop();
        }
        self.update_filter();
    }

    fn apply(&mut self) {
        self.filter = match std::mem::take(&mut self.filter) {
            FilterState::Editing(query) if query.is_empty() => FilterState::Off,
            FilterState::Editing(query) => FilterState::Applied(query),
            other => other,
        };
    }

    fn update_filter(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let query = self
            .filter
            .query()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.visible = match query {
            None => (0..self.items.len()).collect(),
            Some(query) => self
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| {
                    let value = item.filter_value();
                    !value.is_empty() && value.to_lowercase().contains(&query)
                })
                .map(|(idx, _)| idx)
                .collect(),
        };
    }

    /// Apply a navigation or filter key.
    ///
    /// Returns `true` when the key was consumed by the list.
    pub fn handle_key(&mut self, key: &InputKey) -> bool {
        if self.is_filtering() {
            match key {
                InputKey::Char(c) => self.input_char(*c),
                InputKey::Backspace => self.backspace(),
                InputKey::Enter | InputKey::Tab | InputKey::BackTab => self.apply(),
                InputKey::Esc => self.clear_filter(),
                InputKey::Up => self.navigate_up(),
                InputKey::Down => self.navigate_down(),
                _ => return false,
            }
            return true;
        }

        match key {
            InputKey::Up | InputKey::Char('k') => self.navigate_up(),
            InputKey::Down | InputKey::Char('j') => self.navigate_down(),
            InputKey::Home | InputKey::Char('g') => self.select_first(),
            InputKey::End | InputKey::Char('G') => self.select_last(),
            InputKey::PageUp => self.page_up(),
            InputKey::PageDown => self.page_down(),
            InputKey::Char('/') if self.filterable => self.start_filter(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Row {
        Add,
        Named(&'static str),
    }

    impl ListItem for Row {
        fn label(&self) -> String {
            match self {
                Row::Add => "Add...".to_string(),
                Row::Named(name) => name.to_string(),
            }
        }

        fn filter_value(&self) -> String {
            match self {
                Row::Add => String::new(),
                Row::Named(name) => name.to_string(),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::Add,
            Row::Named("dev"),
            Row::Named("staging"),
            Row::Named("prod"),
        ]
    }

    #[test]
    fn test_navigation_stops_at_edges() {
        let mut list = SelectList::new(rows(), false);
        list.navigate_up();
        assert_eq!(list.selected(), Some(&Row::Add));

        for _ in 0..10 {
            list.navigate_down();
        }
        assert_eq!(list.selected(), Some(&Row::Named("prod")));
    }

    #[test]
    fn test_vim_keys_navigate() {
        let mut list = SelectList::new(rows(), false);
        assert!(list.handle_key(&InputKey::Char('j')));
        assert_eq!(list.selected(), Some(&Row::Named("dev")));
        assert!(list.handle_key(&InputKey::Char('G')));
        assert_eq!(list.selected(), Some(&Row::Named("prod")));
        assert!(list.handle_key(&InputKey::Char('g')));
        assert_eq!(list.selected(), Some(&Row::Add));
    }

    #[test]
    fn test_filter_hides_placeholders() {
        let mut list = SelectList::new(rows(), true);
        assert!(list.handle_key(&InputKey::Char('/')));
        assert!(list.is_filtering());

        list.handle_key(&InputKey::Char('D'));
        let visible: Vec<_> = list.visible_items().cloned().collect();
        assert_eq!(visible, vec![Row::Named("dev"), Row::Named("prod")]);
    }

    #[test]
    fn test_filter_enter_applies_and_esc_clears() {
        let mut list = SelectList::new(rows(), true);
        list.handle_key(&InputKey::Char('/'));
        list.handle_key(&InputKey::Char('s'));
        list.handle_key(&InputKey::Enter);

        assert!(!list.is_filtering());
        assert_eq!(list.filter(), &FilterState::Applied("s".to_string()));
        assert_eq!(list.selected(), Some(&Row::Named("staging")));

        list.clear_filter();
        assert_eq!(list.visible_len(), 4);
    }

    #[test]
    fn test_empty_filter_turns_off() {
        let mut list = SelectList::new(rows(), true);
        list.handle_key(&InputKey::Char('/'));
        list.handle_key(&InputKey::Enter);
        assert_eq!(list.filter(), &FilterState::Off);
    }

    #[test]
    fn test_slash_ignored_when_not_filterable() {
        let mut list = SelectList::new(rows(), false);
        assert!(!list.handle_key(&InputKey::Char('/')));
        assert!(!list.is_filtering());
    }

    #[test]
    fn test_no_match_selects_nothing() {
        let mut list = SelectList::new(rows(), true);
        list.handle_key(&InputKey::Char('/'));
        list.handle_key(&InputKey::Char('x'));
        assert!(list.is_empty());
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_set_items_clamps_selection() {
        let mut list = SelectList::new(rows(), false);
        list.handle_key(&InputKey::End);
        list.set_items(vec![Row::Add, Row::Named("dev")]);
        assert_eq!(list.selected(), Some(&Row::Named("dev")));
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut list = SelectList::new(rows(), false);
        list.set_height(2);
        list.handle_key(&InputKey::End);
        assert_eq!(list.scroll_offset(), 2);
        list.handle_key(&InputKey::Home);
        assert_eq!(list.scroll_offset(), 0);
    }
}
