//! Single-line query editor.

use unicode_width::UnicodeWidthStr;

/// Query text plus a cursor measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> u16 {
        let before = &self.text[..self.byte_index(self.cursor)];
        u16::try_from(before.width()).unwrap_or(u16::MAX)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert text at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(if c == '\n' || c == '\r' { ' ' } else { c });
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> SearchInput {
        let mut input = SearchInput::new();
        input.insert_str(s);
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("rust");
        assert_eq!(input.text(), "rust");
        assert_eq!(input.cursor(), 4);

        input.backspace();
        assert_eq!(input.text(), "rus");
    }

    #[test]
    fn test_edit_in_the_middle() {
        let mut input = typed("rst");
        input.move_left();
        input.move_left();
        input.insert_char('u');
        assert_eq!(input.text(), "rust");

        input.move_home();
        input.delete();
        assert_eq!(input.text(), "ust");
        input.move_end();
        input.move_right();
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = typed("héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "hllo");
    }

    #[test]
    fn test_cursor_column_uses_display_width() {
        let input = typed("日本");
        assert_eq!(input.cursor(), 2);
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let input = typed("tokio\nselect");
        assert_eq!(input.text(), "tokio select");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = SearchInput::new();
        input.backspace();
        input.delete();
        assert!(input.is_empty());
    }
}
