//! # Editor Services
//!
//! Timer-gated side effects: the debounced highlight trigger and the chord
//! window. Both are single deadline slots polled from the event loop, so
//! scheduling always cancels and replaces, never queues.

pub mod chord;
pub mod highlight;

pub use chord::ChordTimer;
pub use highlight::HighlightDebouncer;
