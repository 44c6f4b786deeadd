//! # Text Field
//!
//! Editable text with a cursor. Cursor positions are char indices so that
//! multi-byte input never splits a UTF-8 sequence.

use crate::form::events::LogicalPosition;

/// Editable text buffer backing the URL, Headers and Body fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    /// Cursor as a char index into `text`
    cursor: usize,
    multiline: bool,
}

impl TextField {
    pub fn single_line() -> Self {
        Self::default()
    }

    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Replace the content and place the cursor at the end
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = if self.multiline {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], "")
        };
        self.cursor = self.char_count();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Char index where `line` begins
    fn line_start(&self, line: usize) -> usize {
        self.lines()
            .iter()
            .take(line)
            .map(|l| l.chars().count() + 1)
            .sum()
    }

    /// Line and column of the cursor
    pub fn cursor_position(&self) -> LogicalPosition {
        let mut line = 0;
        let mut column = 0;
        for ch in self.text.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        LogicalPosition::new(line, column)
    }

    /// Insert text at the cursor. Newlines are dropped in single-line fields.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let filtered: String = if self.multiline {
            text.to_string()
        } else {
            text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
        };
        if filtered.is_empty() {
            return false;
        }

        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &filtered);
        self.cursor += filtered.chars().count();
        true
    }

    /// Remove the char before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Remove the char under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn move_up(&mut self) -> bool {
        let position = self.cursor_position();
        if position.line == 0 {
            return false;
        }
        self.move_to_line(position.line - 1, position.column);
        true
    }

    pub fn move_down(&mut self) -> bool {
        let position = self.cursor_position();
        if position.line + 1 >= self.lines().len() {
            return false;
        }
        self.move_to_line(position.line + 1, position.column);
        true
    }

    fn move_to_line(&mut self, line: usize, column: usize) {
        let line_len = self
            .lines()
            .get(line)
            .map(|l| l.chars().count())
            .unwrap_or(0);
        self.cursor = self.line_start(line) + column.min(line_len);
    }

    pub fn move_line_start(&mut self) -> bool {
        let position = self.cursor_position();
        let target = self.line_start(position.line);
        let moved = target != self.cursor;
        self.cursor = target;
        moved
    }

    pub fn move_line_end(&mut self) -> bool {
        let position = self.cursor_position();
        let before = self.cursor;
        self.move_to_line(position.line, usize::MAX);
        before != self.cursor
    }
}
