//! # Core Event Types
//!
//! Platform identity for primary-modifier selection and key-name formatting
//! for event-log entries.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Platform family, used to pick the primary command modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Command (super) is the primary modifier
    MacOs,
    /// Control is the primary modifier
    Other,
}

impl Platform {
    /// Detect the platform the process is running on
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// The platform-appropriate primary command modifier
    pub fn primary_modifier(&self) -> KeyModifiers {
        match self {
            Platform::MacOs => KeyModifiers::SUPER,
            Platform::Other => KeyModifiers::CONTROL,
        }
    }
}

/// Human-readable key name for event-log entries.
///
/// Names follow the surface's original conventions: printable chars appear
/// verbatim, named keys use their DOM-style names ("Enter", "Tab",
/// "ArrowLeft", ...).
pub fn key_name(event: &KeyEvent) -> String {
    match event.code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        other => format!("{other:?}"),
    }
}
