//! Minimal single-line text field for form input.
//!
//! Cursor positions are in char units; byte offsets are derived on edit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars from the start.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Inserts text at the cursor. Line breaks are dropped.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(ch);
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, ch);
        self.cursor += 1;
    }

    /// Backspace semantics.
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete-key semantics.
    pub fn delete_next_char(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Applies an editing key. Returns false for keys the field doesn't handle.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char('a') if ctrl => self.move_home(),
            KeyCode::Char('e') if ctrl => self.move_end(),
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(ch) => self.insert_char(ch),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::default();
        for ch in "alicex".chars() {
            assert!(field.handle_key(key(KeyCode::Char(ch))));
        }
        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.value(), "alice");
        assert_eq!(field.cursor(), 5);
    }

    #[test]
    fn test_insert_in_middle_multibyte() {
        let mut field = TextField::default();
        field.insert_str("zażółć");
        field.move_home();
        field.move_right();
        field.insert_char('X');
        assert_eq!(field.value(), "zXażółć");
        field.move_end();
        field.delete_prev_char();
        assert_eq!(field.value(), "zXażół");
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut field = TextField::default();
        field.insert_str("pass\nword\r\n");
        assert_eq!(field.value(), "password");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut field = TextField::default();
        field.insert_str("ab");
        field.handle_key(key(KeyCode::Delete));
        assert_eq!(field.value(), "ab");
        field.handle_key(key(KeyCode::Home));
        field.handle_key(key(KeyCode::Delete));
        assert_eq!(field.value(), "b");
    }

    #[test]
    fn test_unhandled_keys() {
        let mut field = TextField::default();
        assert!(!field.handle_key(key(KeyCode::Enter)));
        assert!(!field.handle_key(key(KeyCode::Tab)));
        assert!(!field.handle_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }
}
