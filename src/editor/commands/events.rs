//! # Command Events
//!
//! Request events produced by commands. Commands suggest, the view model
//! applies; this keeps dispatch decisions separate from state mutation.

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Request the save action (log entry only, no content mutation)
    SaveRequested,

    /// Request an undo of the most recent commit
    UndoRequested,

    /// Request a redo of the most recently undone commit
    RedoRequested,

    /// Request a two-space indent spliced at the selection start
    IndentRequested { offset: usize },

    /// Request removal of one leading indent run from the buffer start
    OutdentRequested,

    /// Request a newline carrying the last line's indentation
    NewlineRequested,

    /// Request a line-comment toggle on the line containing the offset
    CommentToggleRequested { offset: usize },

    /// Request arming of the chord window
    ChordArmRequested,

    /// Request chord completion (only dispatched while armed)
    ChordCompleteRequested,
}
