//! # Views
//!
//! Terminal presentation layer. Consumes view-model state; owns no
//! editing logic.

pub mod terminal_renderer;

pub use terminal_renderer::TerminalRenderer;
