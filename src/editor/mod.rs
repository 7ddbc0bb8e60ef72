//! # Editor MVVM Implementation
//!
//! The editing command state machine and its surface, split along MVVM
//! lines: models own data, the view model coordinates, commands translate
//! keystrokes into requests, views render, the controller runs the loop.

pub mod commands;
pub mod controller;
pub mod events;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controller::AppController;
pub use events::*;
pub use view_models::EditorViewModel;
pub use views::TerminalRenderer;

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, EditorSnapshot};

// Re-export specific items from models to avoid conflicts
pub use models::{BufferModel, EventLog, HistoryModel};
