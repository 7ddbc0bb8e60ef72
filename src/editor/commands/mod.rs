//! # Command Pattern Implementation
//!
//! The command dispatcher for key-down events. Each rule of the editing
//! surface is one stateless `Command`; the registry tries them in the fixed
//! precedence order and the first relevant command wins. Rules are mutually
//! exclusive by key identity, so at most one command matches a keystroke.
//! Commands read an immutable snapshot and emit request events; the view
//! model applies them.

pub mod chord;
pub mod context;
pub mod editing;
pub mod events;
pub mod history;

pub use chord::{ChordArmCommand, ChordCompleteCommand};
pub use context::{CommandContext, EditorSnapshot};
pub use editing::{CommentToggleCommand, IndentCommand, NewlineCommand, OutdentCommand};
pub use events::CommandEvent;
pub use history::{RedoCommand, SaveCommand, UndoCommand};

use anyhow::Result;
use crossterm::event::KeyEvent;

/// Trait for key-down command rules
///
/// Commands check relevancy against the snapshot and, when relevant,
/// translate the keystroke into request events.
pub trait Command {
    /// Check if this command matches the current state and key event
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Translate the keystroke into request events
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Command name for diagnostics
    fn name(&self) -> &'static str;

    /// Whether a match suppresses the key's default text insertion.
    ///
    /// Every rule suppresses except the chord initiator.
    fn suppresses_default(&self) -> bool {
        true
    }
}

/// Outcome of dispatching one key-down event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Whether any command matched the keystroke
    pub handled: bool,
    /// Whether the key's default insertion must be suppressed
    pub suppress_default: bool,
    /// Request events for the view model to apply
    pub events: Vec<CommandEvent>,
}

impl Dispatch {
    /// Outcome for a keystroke no rule matched: it passes through to the
    /// input-change path
    pub fn pass_through() -> Self {
        Self {
            handled: false,
            suppress_default: false,
            events: Vec::new(),
        }
    }
}

/// Type alias for the command collection to reduce complexity
pub type CommandCollection = Vec<Box<dyn Command>>;

/// Registry holding the dispatch rules in precedence order
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create a registry with the full rule set
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    /// Register the rules in their fixed precedence order
    fn register_default_commands(&mut self) {
        self.add_command(Box::new(SaveCommand));
        self.add_command(Box::new(UndoCommand));
        self.add_command(Box::new(RedoCommand));
        self.add_command(Box::new(IndentCommand));
        self.add_command(Box::new(OutdentCommand));
        self.add_command(Box::new(NewlineCommand));
        self.add_command(Box::new(CommentToggleCommand));
        self.add_command(Box::new(ChordArmCommand));
        self.add_command(Box::new(ChordCompleteCommand));
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch a key-down event: the first relevant command wins
    pub fn process_event(&self, event: KeyEvent, context: &CommandContext) -> Result<Dispatch> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("dispatching key event to {}", command.name());
                let events = command.execute(event, context)?;
                return Ok(Dispatch {
                    handled: true,
                    suppress_default: command.suppresses_default(),
                    events,
                });
            }
        }
        Ok(Dispatch::pass_through())
    }

    /// All registered commands (for testing/debugging)
    pub fn commands(&self) -> &CommandCollection {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::events::Platform;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn create_test_context() -> CommandContext {
        CommandContext::new(EditorSnapshot {
            content: String::new(),
            selection_start: 0,
            chord_armed: false,
            platform: Platform::Other,
        })
    }

    #[test]
    fn registry_should_register_all_rules() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.commands().len(), 9);
    }

    #[test]
    fn registry_should_dispatch_save_with_suppression() {
        let registry = CommandRegistry::new();
        let context = create_test_context();
        let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        let dispatch = registry.process_event(event, &context).unwrap();
        assert!(dispatch.handled);
        assert!(dispatch.suppress_default);
        assert_eq!(dispatch.events, vec![CommandEvent::SaveRequested]);
    }

    #[test]
    fn registry_should_pass_through_plain_keystrokes() {
        let registry = CommandRegistry::new();
        let context = create_test_context();
        let event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);

        let dispatch = registry.process_event(event, &context).unwrap();
        assert_eq!(dispatch, Dispatch::pass_through());
    }

    #[test]
    fn registry_should_not_suppress_chord_initiator() {
        let registry = CommandRegistry::new();
        let context = create_test_context();
        let event = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);

        let dispatch = registry.process_event(event, &context).unwrap();
        assert!(dispatch.handled);
        assert!(!dispatch.suppress_default);
        assert_eq!(dispatch.events, vec![CommandEvent::ChordArmRequested]);
    }

    #[test]
    fn registry_should_route_shifted_z_to_redo() {
        let registry = CommandRegistry::new();
        let context = create_test_context();
        let event = KeyEvent::new(
            KeyCode::Char('Z'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );

        let dispatch = registry.process_event(event, &context).unwrap();
        assert_eq!(dispatch.events, vec![CommandEvent::RedoRequested]);
    }

    #[test]
    fn registry_should_ignore_unarmed_chord_completion() {
        let registry = CommandRegistry::new();
        let context = create_test_context();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        let dispatch = registry.process_event(event, &context).unwrap();
        assert!(!dispatch.handled);
    }
}
