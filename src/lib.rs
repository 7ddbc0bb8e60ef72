//! # Keyline - Keyboard-Driven Editor Surface for the Terminal
//!
//! A single-field plain-text editor with keyboard-driven editing commands:
//! undo/redo, indent/outdent, auto-indentation on line break, line-comment
//! toggling, a two-key chord shortcut, and a debounced post-edit highlight
//! pass. Every dispatched event is recorded in an append-only event log.
//!
//! ## Architecture
//!
//! The application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    State     ┌──────────────┐    Updates   ┌─────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ Models  │
//! │             │              │              │              │         │
//! │ - Terminal  │              │ - Command    │              │ - Buffer│
//! │ - Rendering │              │   application│              │ - History│
//! │ - Event log │              │ - Timer slots│              │ - Log   │
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ CommandEvents
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Dispatch   │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod editor;

// Re-export main types for easy access
pub use editor::*;
