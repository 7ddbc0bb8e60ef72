//! # History Commands
//!
//! Save, undo, and redo. All three ride the platform primary modifier and
//! suppress the key's default text insertion.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

fn has_primary_modifier(context: &CommandContext, event: &KeyEvent) -> bool {
    event
        .modifiers
        .contains(context.state.platform.primary_modifier())
}

fn is_char(event: &KeyEvent, ch: char) -> bool {
    matches!(event.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

/// Save action (modifier+s): log entry only, no content mutation
pub struct SaveCommand;

impl Command for SaveCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        is_char(event, 's') && has_primary_modifier(context, event)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::SaveRequested])
    }

    fn name(&self) -> &'static str {
        "Save"
    }
}

/// Undo (modifier+z without shift)
pub struct UndoCommand;

impl Command for UndoCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        is_char(event, 'z')
            && has_primary_modifier(context, event)
            && !event.modifiers.contains(KeyModifiers::SHIFT)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::UndoRequested])
    }

    fn name(&self) -> &'static str {
        "Undo"
    }
}

/// Redo (modifier+shift+z)
pub struct RedoCommand;

impl Command for RedoCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        is_char(event, 'z')
            && has_primary_modifier(context, event)
            && event.modifiers.contains(KeyModifiers::SHIFT)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::RedoRequested])
    }

    fn name(&self) -> &'static str {
        "Redo"
    }
}
