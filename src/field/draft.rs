use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Editable text plus a cursor measured in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftBuffer {
    text: String,
    cursor: usize,
}

impl DraftBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text in front of the cursor.
    pub fn cursor_width(&self) -> usize {
        let byte = self.byte_index(self.cursor);
        self.text[..byte].width()
    }

    /// Replaces the text and parks the cursor at the end.
    pub fn replace(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Applies a key to the buffer, returning whether anything changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.text.insert(at, ch);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
                true
            }
            KeyCode::Delete => {
                if self.text.is_empty() {
                    return false;
                }
                self.clear();
                true
            }
            KeyCode::Left => self.move_to(self.cursor.saturating_sub(1)),
            KeyCode::Right => self.move_to((self.cursor + 1).min(self.char_len())),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.char_len()),
            _ => false,
        }
    }

    fn move_to(&mut self, cursor: usize) -> bool {
        if cursor == self.cursor {
            return false;
        }
        self.cursor = cursor;
        true
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}
