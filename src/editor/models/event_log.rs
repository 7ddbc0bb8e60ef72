//! Append-only event log
//!
//! Ordered, human-readable descriptions of every dispatched event. The log
//! grows monotonically and is never pruned or reordered; an external
//! display layer consumes it, but dispatch order and entry content are part
//! of the editor's contract.

/// Append-only ordered sequence of event descriptions
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry at the end of the log
    pub fn append(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// All entries in append order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_should_start_empty() {
        let log = EventLog::new();
        assert!(log.is_empty());
    }

    #[test]
    fn append_should_preserve_order() {
        let mut log = EventLog::new();
        log.append("keydown: a");
        log.append("input: a");
        log.append("keyup: a");

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries(), ["keydown: a", "input: a", "keyup: a"]);
    }
}
