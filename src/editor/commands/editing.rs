//! # Text Editing Commands
//!
//! Indent, outdent, auto-indenting newline, and line-comment toggle. Each
//! suppresses the key's default insertion and commits the transformed
//! content to history.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Tab without shift: splice the indent unit at the selection start
pub struct IndentCommand;

impl Command for IndentCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Tab) && !event.modifiers.contains(KeyModifiers::SHIFT)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::IndentRequested {
            offset: context.state.selection_start,
        }])
    }

    fn name(&self) -> &'static str {
        "Indent"
    }
}

/// Shift+Tab: remove one leading indent run from the buffer start.
///
/// Terminals deliver shift+tab as BackTab; a Tab with the shift modifier is
/// accepted too for surfaces that report it that way.
pub struct OutdentCommand;

impl Command for OutdentCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::BackTab => true,
            KeyCode::Tab => event.modifiers.contains(KeyModifiers::SHIFT),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::OutdentRequested])
    }

    fn name(&self) -> &'static str {
        "Outdent"
    }
}

/// Enter: newline carrying the buffer's last-line indentation.
///
/// Enter never reaches the default insertion path; the transform appends
/// the newline itself.
pub struct NewlineCommand;

impl Command for NewlineCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Enter)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::NewlineRequested])
    }

    fn name(&self) -> &'static str {
        "Newline"
    }
}

/// Modifier+/: toggle the line comment on the selection's line
pub struct CommentToggleCommand;

impl Command for CommentToggleCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('/'))
            && event
                .modifiers
                .contains(context.state.platform.primary_modifier())
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CommentToggleRequested {
            offset: context.state.selection_start,
        }])
    }

    fn name(&self) -> &'static str {
        "CommentToggle"
    }
}
