//! Single-line text input state

use crate::input_key::InputKey;

/// Longest value accepted by an input
pub const DEFAULT_CHAR_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    /// Cursor position in characters
    cursor: usize,
    focused: bool,
    placeholder: &'static str,
    char_limit: usize,
}

impl TextInput {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder,
            char_limit: DEFAULT_CHAR_LIMIT,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Replace the value and move the cursor to its end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into().chars().take(self.char_limit).collect();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, c: char) {
        if self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Apply an editing key. Returns `true` when consumed.
    pub fn handle_key(&mut self, key: &InputKey) -> bool {
        match key {
            InputKey::Char(c) => self.insert(*c),
            InputKey::Backspace => self.backspace(),
            InputKey::Delete => self.delete(),
            InputKey::Left => self.cursor = self.cursor.saturating_sub(1),
            InputKey::Right => self.cursor = (self.cursor + 1).min(self.len()),
            InputKey::Home | InputKey::CharCtrl('a') => self.cursor = 0,
            InputKey::End | InputKey::CharCtrl('e') => self.cursor = self.len(),
            InputKey::CharCtrl('u') => self.clear(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new("");
        for c in text.chars() {
            input.handle_key(&InputKey::Char(c));
        }
        input
    }

    #[test]
    fn test_typing_appends() {
        let input = typed("dev");
        assert_eq!(input.value(), "dev");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = typed("dv");
        input.handle_key(&InputKey::Left);
        input.handle_key(&InputKey::Char('e'));
        assert_eq!(input.value(), "dev");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = typed("prod");
        input.handle_key(&InputKey::Backspace);
        assert_eq!(input.value(), "pro");

        input.handle_key(&InputKey::Home);
        input.handle_key(&InputKey::Delete);
        assert_eq!(input.value(), "ro");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("héllo");
        input.handle_key(&InputKey::Left);
        input.handle_key(&InputKey::Left);
        input.handle_key(&InputKey::Left);
        input.handle_key(&InputKey::Backspace);
        assert_eq!(input.value(), "hllo");
    }

    #[test]
    fn test_char_limit() {
        let input = typed(&"x".repeat(DEFAULT_CHAR_LIMIT + 5));
        assert_eq!(input.value().len(), DEFAULT_CHAR_LIMIT);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = typed("stg");
        input.handle_key(&InputKey::CharCtrl('u'));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut input = TextInput::new("key");
        input.set_value("EDITOR");
        assert_eq!(input.cursor(), 6);
    }

    #[test]
    fn test_navigation_keys_not_consumed() {
        let mut input = TextInput::new("");
        assert!(!input.handle_key(&InputKey::Tab));
        assert!(!input.handle_key(&InputKey::Enter));
        assert!(!input.handle_key(&InputKey::Up));
    }
}
