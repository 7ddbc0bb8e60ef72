//! # Chord Commands
//!
//! The two-step shortcut: modifier+k arms the chord window, modifier+c
//! inside the window completes it. The initiator is the one rule that does
//! not suppress the key's default handling; an unarmed completion key is an
//! ordinary keystroke and matches nothing here.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};

fn is_primary_char(context: &CommandContext, event: &KeyEvent, ch: char) -> bool {
    matches!(event.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
        && event
            .modifiers
            .contains(context.state.platform.primary_modifier())
}

/// Chord initiator (modifier+k): arm the window
pub struct ChordArmCommand;

impl Command for ChordArmCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        is_primary_char(context, event, 'k')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ChordArmRequested])
    }

    fn name(&self) -> &'static str {
        "ChordArm"
    }

    fn suppresses_default(&self) -> bool {
        false
    }
}

/// Chord completion (modifier+c while armed)
pub struct ChordCompleteCommand;

impl Command for ChordCompleteCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.chord_armed && is_primary_char(context, event, 'c')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ChordCompleteRequested])
    }

    fn name(&self) -> &'static str {
        "ChordComplete"
    }
}
