//! Buffer model for the editor surface
//!
//! Owns the authoritative content string and the selection-start offset.
//! Content is replaced wholesale on every edit; the model only clamps the
//! selection so it always points inside the content.

use super::transforms::{char_to_byte_offset, insert_at};

/// The single editable text field: current content plus selection start
#[derive(Debug, Clone, Default)]
pub struct BufferModel {
    content: String,
    cursor: usize,
}

impl BufferModel {
    /// Create an empty buffer with the selection at offset 0
    pub fn new() -> Self {
        Self::default()
    }

    /// The live content string
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content length in chars
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Current selection-start offset (char index)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the content wholesale, clamping the selection to the new end
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.cursor = self.cursor.min(self.char_len());
    }

    /// Replace the content and move the selection to `cursor` (clamped)
    pub fn replace(&mut self, content: String, cursor: usize) {
        self.content = content;
        self.cursor = cursor.min(self.char_len());
    }

    /// Insert a single typed char at the selection, advancing it by one
    pub fn insert_char(&mut self, ch: char) {
        self.content = insert_at(&self.content, self.cursor, &ch.to_string());
        self.cursor += 1;
    }

    /// Delete the char before the selection. Returns false when the
    /// selection is already at offset 0 and nothing changed.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_offset(&self.content, self.cursor - 1);
        let end = char_to_byte_offset(&self.content, self.cursor);
        self.content.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the char at the selection. Returns false when the selection
    /// is already at the end and nothing changed.
    pub fn delete_at_cursor(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let start = char_to_byte_offset(&self.content, self.cursor);
        let end = char_to_byte_offset(&self.content, self.cursor + 1);
        self.content.replace_range(start..end, "");
        true
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }
}
