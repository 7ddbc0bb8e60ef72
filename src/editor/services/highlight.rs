//! Debounced highlight trigger
//!
//! Collapses bursts of edits into at most one highlight pass per quiet
//! period. The pending firing is a single deadline slot: scheduling always
//! replaces it, so a superseded deadline never fires and never touches the
//! counter. The invocation counter increments exactly once per settled
//! window and is externally observable.

use std::time::{Duration, Instant};

/// Single-slot debounce timer with a settled-invocation counter
#[derive(Debug, Clone)]
pub struct HighlightDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
    invocations: u64,
}

impl HighlightDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            invocations: 0,
        }
    }

    /// Schedule (or reschedule) the highlight pass `delay` after `now`.
    ///
    /// Cancels any pending firing; at most one firing is ever pending.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Fire the highlight pass if its quiet period has elapsed.
    ///
    /// Returns true when the pass settled; the slot is cleared and the
    /// counter incremented exactly once.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.invocations += 1;
                true
            }
            _ => false,
        }
    }

    /// Count of settled (non-superseded) firings since creation
    pub fn invocation_count(&self) -> u64 {
        self.invocations
    }

    /// Whether a firing is currently pending
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
