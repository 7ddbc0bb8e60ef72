//! Undo/redo history for the editor surface
//!
//! History is an ordered sequence of content snapshots, oldest first, and
//! always holds at least the initial empty string. The redo stack carries
//! states undone but not yet reapplied. `commit`, `undo`, and `redo` are the
//! only mutation entry points.

/// Append-only undo stack plus redo stack over whole-content snapshots
#[derive(Debug, Clone)]
pub struct HistoryModel {
    history: Vec<String>,
    redo_stack: Vec<String>,
}

impl HistoryModel {
    /// Create a history holding only the initial empty snapshot
    pub fn new() -> Self {
        Self {
            history: vec![String::new()],
            redo_stack: Vec::new(),
        }
    }

    /// Append `new_content` to the history and clear the redo stack.
    ///
    /// Always succeeds, even when `new_content` equals the current last
    /// snapshot; every accepted edit produces an entry.
    pub fn commit(&mut self, new_content: &str) {
        self.history.push(new_content.to_string());
        self.redo_stack.clear();
    }

    /// Undo the most recent commit.
    ///
    /// Returns the content to display, or `None` when only the initial
    /// snapshot remains (saturating no-op). The undone snapshot moves to
    /// the redo stack.
    pub fn undo(&mut self) -> Option<String> {
        if self.history.len() <= 1 {
            return None;
        }
        let last = self.history.pop()?;
        self.redo_stack.push(last);
        self.history.last().cloned()
    }

    /// Reapply the most recently undone snapshot.
    ///
    /// Returns the content to display, or `None` when the redo stack is
    /// empty (saturating no-op). The snapshot is pushed back onto history.
    pub fn redo(&mut self) -> Option<String> {
        let value = self.redo_stack.pop()?;
        self.history.push(value.clone());
        Some(value)
    }

    /// Number of snapshots in the undo history
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// History always holds the initial snapshot
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of snapshots available for redo
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The most recent snapshot
    pub fn last(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("")
    }
}

impl Default for HistoryModel {
    fn default() -> Self {
        Self::new()
    }
}
