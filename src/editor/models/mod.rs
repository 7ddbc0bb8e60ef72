//! # Editor Models
//!
//! Data-owning state for the editor surface: the content buffer, the
//! undo/redo history, the append-only event log, and the pure content
//! transforms they are built on. Models hold no view concerns.

pub mod buffer_model;
pub mod event_log;
pub mod history_model;
pub mod transforms;

pub use buffer_model::BufferModel;
pub use event_log::EventLog;
pub use history_model::HistoryModel;
