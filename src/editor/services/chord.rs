//! Chord timer
//!
//! Short-lived armed state gating the two-step keyboard shortcut. Arming
//! sets a single deadline slot (last writer wins, so rapid re-initiation
//! restarts the window rather than compounding); the state auto-expires at
//! the deadline or disarms immediately on chord completion.

use std::time::{Duration, Instant};

/// Armed/disarmed state with a fixed expiry window
#[derive(Debug, Clone)]
pub struct ChordTimer {
    window: Duration,
    deadline: Option<Instant>,
}

impl ChordTimer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Arm the chord, replacing any previously scheduled expiry
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True while armed and inside the window
    pub fn is_armed(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    /// Disarm immediately (successful chord completion)
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Clear an expired deadline slot
    pub fn poll(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.deadline = None;
            }
        }
    }
}
