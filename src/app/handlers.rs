//! Keyboard and paste handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// Apply one key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.detail.is_some() {
            self.handle_detail_key(key);
        } else {
            self.handle_search_key(key, ctrl);
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_detail(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_detail_link(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Tab => self.open_detail(),
            KeyCode::Char('o') if ctrl => self.open_detail(),
            _ if !self.view().connected => {}
            KeyCode::Enter => self.submit_search(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Char(c) if !ctrl => self.input.insert_char(c),
            _ => {}
        }
    }

    /// Insert pasted text into the query.
    pub fn handle_paste(&mut self, text: &str) {
        if self.detail.is_some() || !self.view().connected {
            return;
        }
        self.input.insert_str(text);
        self.mark_dirty();
    }
}
