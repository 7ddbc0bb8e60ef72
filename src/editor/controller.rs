//! # Application Controller
//!
//! Orchestrates the editor components and runs the event loop: key-down
//! events flow through the command registry, unmatched keystrokes fall
//! through to the input-change path, key releases only log, and both timer
//! slots are polled once per loop turn.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cmd_args::CommandLineArgs;
use crate::editor::commands::{CommandContext, CommandRegistry, EditorSnapshot};
use crate::editor::events::Platform;
use crate::editor::view_models::EditorViewModel;
use crate::editor::views::TerminalRenderer;

/// The main application controller wiring view model, registry, and view
pub struct AppController {
    view_model: EditorViewModel,
    view_renderer: TerminalRenderer<std::io::Stdout>,
    command_registry: CommandRegistry,
    should_quit: bool,
}

impl AppController {
    /// Create a new application controller from command-line settings
    pub fn new(cmd_args: CommandLineArgs) -> Result<Self> {
        let view_model =
            EditorViewModel::with_settings(cmd_args.debounce_delay(), Platform::detect());
        let view_renderer = TerminalRenderer::new(std::io::stdout())?;
        let command_registry = CommandRegistry::new();

        Ok(Self {
            view_model,
            view_renderer,
            command_registry,
            should_quit: false,
        })
    }

    /// Run the main event loop until Ctrl+Q
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.view_renderer
            .render_full(&self.view_model, Instant::now())?;

        while !self.should_quit {
            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key_event) => self.handle_key_event(key_event)?,
                    Event::Resize(width, height) => {
                        self.view_renderer.update_size(width, height);
                        self.view_renderer
                            .render_full(&self.view_model, Instant::now())?;
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            self.view_model.tick(now);
            if self.view_model.take_dirty() {
                self.view_renderer.render_full(&self.view_model, now)?;
            }
        }

        self.view_renderer.cleanup()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_down(key_event),
            KeyEventKind::Release => {
                self.view_model.record_key_up(&key_event);
                Ok(())
            }
        }
    }

    fn handle_key_down(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("received key event: {:?}", key_event);

        if Self::is_quit_key(&key_event) {
            self.should_quit = true;
            return Ok(());
        }

        let now = Instant::now();
        self.view_model.record_key_down(&key_event);

        let context =
            CommandContext::new(EditorSnapshot::from_view_model(&self.view_model, now));
        let dispatch = self.command_registry.process_event(key_event, &context)?;

        if dispatch.handled {
            for command_event in dispatch.events {
                self.view_model.apply_command_event(command_event, now);
            }
            // The chord initiator leaves the key to the default path
            if !dispatch.suppress_default {
                self.apply_default_input(key_event, now);
            }
        } else {
            self.apply_default_input(key_event, now);
        }

        Ok(())
    }

    /// The input-change path: plain typing and selection-only keys
    fn apply_default_input(&mut self, key_event: KeyEvent, now: Instant) {
        match key_event.code {
            KeyCode::Char(ch) => {
                let blocked = KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::ALT;
                if !key_event.modifiers.intersects(blocked) {
                    self.view_model.apply_char_input(ch, now);
                }
            }
            KeyCode::Backspace => self.view_model.apply_backspace(now),
            KeyCode::Delete => self.view_model.apply_delete(now),
            KeyCode::Left => self.view_model.move_selection_left(),
            KeyCode::Right => self.view_model.move_selection_right(),
            KeyCode::Home => self.view_model.move_selection_home(),
            KeyCode::End => self.view_model.move_selection_end(),
            _ => {}
        }
    }

    /// Ctrl+Q quits (Ctrl+C is taken by the chord completion)
    fn is_quit_key(key_event: &KeyEvent) -> bool {
        matches!(key_event.code, KeyCode::Char('q'))
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Get reference to the view model (for testing)
    pub fn view_model(&self) -> &EditorViewModel {
        &self.view_model
    }

    /// Get mutable reference to the view model (for testing)
    pub fn view_model_mut(&mut self) -> &mut EditorViewModel {
        &mut self.view_model
    }
}
