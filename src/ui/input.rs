//! Single-line text input
//!
//! Cursor positions count characters, not bytes, so names with accents or
//! emoji edit correctly.

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input holding `value` with the cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn len_chars(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len_chars() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.len_chars() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.len_chars();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Text split around the cursor, for rendering a caret
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_index(self.cursor))
    }

    /// Apply an editing key. Returns false for keys the input doesn't handle
    /// (Enter, Esc, Tab...), leaving them to the owning view.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor_left(),
            KeyCode::Right => self.cursor_right(),
            KeyCode::Home => self.cursor_home(),
            KeyCode::End => self.cursor_end(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_editing() {
        let mut input = TextInput::new();
        for c in "hello".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);

        input.cursor_left();
        input.cursor_left();
        input.insert('X');
        assert_eq!(input.value(), "helXlo");

        input.backspace();
        assert_eq!(input.value(), "hello");

        input.cursor_home();
        input.delete();
        assert_eq!(input.value(), "ello");

        input.cursor_end();
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_multibyte() {
        let mut input = TextInput::with_value("Sé❤");
        assert_eq!(input.cursor(), 3);

        input.backspace();
        assert_eq!(input.value(), "Sé");

        input.cursor_left();
        input.insert('ñ');
        assert_eq!(input.value(), "Sñé");
        assert_eq!(input.split_at_cursor(), ("Sñ", "é"));
    }

    #[test]
    fn test_bounds() {
        let mut input = TextInput::new();
        input.backspace();
        input.delete();
        input.cursor_left();
        input.cursor_right();
        assert_eq!(input.cursor(), 0);
        assert!(input.is_empty());
    }

    #[test]
    fn test_handle_key() {
        let mut input = TextInput::new();
        assert!(input.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty())));
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())));
        assert_eq!(input.value(), "a");

        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
