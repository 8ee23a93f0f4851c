//! The ship's log: an append-only, timestamped record of notable events.
//!
//! Entries render as `[<ISO-8601 timestamp>] - <message>`. Timestamps are
//! local wall-clock time with microsecond precision.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format used when rendering entry timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A single immutable log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub message: String,
}

impl LogEntry {
    /// Stamp `message` with the current local time.
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

/// Ordered log of everything the vessel has reported.
///
/// Entries cannot be removed or edited once written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipsLog {
    entries: Vec<LogEntry>,
}

impl ShipsLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Iterate over bare messages, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    /// Whether any entry carries exactly `message`.
    pub fn contains(&self, message: &str) -> bool {
        self.messages().any(|m| m == message)
    }

    /// Formatted lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.to_string()).collect()
    }
}
