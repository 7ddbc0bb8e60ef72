//! # View Models
//!
//! Business logic coordination between models and the view layer.

pub mod core;

pub use core::EditorViewModel;
