//! # Command Context
//!
//! Immutable state snapshot handed to commands. Commands never touch the
//! view model directly; they read the snapshot and emit request events.

use std::time::Instant;

use crate::editor::events::Platform;
use crate::editor::view_models::EditorViewModel;

/// Read-only snapshot of editor state for command dispatch
#[derive(Debug, Clone)]
pub struct EditorSnapshot {
    pub content: String,
    /// Selection-start char offset at the time of the event
    pub selection_start: usize,
    /// Whether the chord window was open when the snapshot was taken
    pub chord_armed: bool,
    pub platform: Platform,
}

impl EditorSnapshot {
    /// Capture the current view-model state at `now`
    pub fn from_view_model(view_model: &EditorViewModel, now: Instant) -> Self {
        Self {
            content: view_model.content().to_string(),
            selection_start: view_model.selection_start(),
            chord_armed: view_model.chord_armed(now),
            platform: view_model.platform(),
        }
    }
}

/// Base context available to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub state: EditorSnapshot,
}

impl CommandContext {
    pub fn new(state: EditorSnapshot) -> Self {
        Self { state }
    }
}
