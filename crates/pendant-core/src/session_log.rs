//! Host-owned session log of findings.
//!
//! The log is created by the host once per session and injected into the
//! analyzer; the engine appends one entry per reported diagnostic. It is a
//! display side-channel, not the diagnostic-reporting channel of record:
//! entries are never pruned during a session, and appends from concurrently
//! analyzed trees are synchronized.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// One entry in the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Message of the finding.
    pub message: String,
    /// Category of the finding (e.g. "NamingConventions").
    pub category: String,
}

/// Append-only, mutex-guarded log of findings for the lifetime of a session.
#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl SessionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn append(&self, message: impl Into<String>, category: impl Into<String>) {
        let entry = LogEntry {
            message: message.into(),
            category: category.into(),
        };
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    /// Returns a snapshot of all entries in append order.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of entries logged so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn append_preserves_order() {
        let log = SessionLog::new();
        log.append("first", "NamingConventions");
        log.append("second", "Comments");

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].category, "Comments");
    }

    #[test]
    fn concurrent_appends_are_all_recorded() {
        let log = Arc::new(SessionLog::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        log.append(format!("entry-{i}"), "Test");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread join");
        }
        assert_eq!(log.len(), 800);
    }

    #[test]
    fn empty_log() {
        let log = SessionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.entries(), Vec::new());
    }
}
