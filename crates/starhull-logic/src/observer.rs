//! Observer seam between the vessel and whoever is watching it.
//!
//! Every log entry and every notable event (destruction, weapon fire, hails,
//! self-destruct arming) is forwarded to a [`ShipObserver`]. The demo harness
//! uses [`ConsoleObserver`] to mirror everything to stdout; tests use
//! [`RecordingObserver`] to capture it without touching the console.

use serde::{Deserialize, Serialize};

use crate::ships_log::LogEntry;

/// Notable happenings that are not plain log lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShipEvent {
    /// Construction has begun and finished for a new vessel.
    Commissioned { name: String, ship_class: String },
    /// Hull integrity reached zero.
    Destroyed,
    WeaponFired { weapon: String },
    HailSent { message: String },
    SelfDestructArmed,
}

pub trait ShipObserver {
    /// Called after every entry is appended to the ship's log.
    fn on_log_entry(&mut self, entry: &LogEntry);

    /// Called for each [`ShipEvent`]. Ignored by default.
    fn on_event(&mut self, _event: &ShipEvent) {}
}

/// Prints log messages and event flourishes to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    /// The console line printed for an event, if any.
    pub fn event_lines(event: &ShipEvent) -> Vec<String> {
        match event {
            ShipEvent::Commissioned { name, ship_class } => vec![
                format!("Constructing the mighty {}, a {}-class vessel!", name, ship_class),
                format!("{} construction complete. All systems... probably online.", name),
            ],
            ShipEvent::Destroyed => vec!["💥💥💥 BOOM! 💥💥💥".to_string()],
            ShipEvent::WeaponFired { weapon } => vec![format!("Pew pew! {} fired!", weapon)],
            ShipEvent::HailSent { message } => vec![format!("Comms: '{}' sent.", message)],
            ShipEvent::SelfDestructArmed => {
                vec!["🚨🚨🚨 SELF DESTRUCT INITIATED 🚨🚨🚨".to_string()]
            }
        }
    }
}

impl ShipObserver for ConsoleObserver {
    fn on_log_entry(&mut self, entry: &LogEntry) {
        println!("Log: {}", entry.message);
    }

    fn on_event(&mut self, event: &ShipEvent) {
        for line in Self::event_lines(event) {
            println!("{}", line);
        }
    }
}

/// Keeps everything it observes in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub entries: Vec<LogEntry>,
    pub events: Vec<ShipEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observed messages, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn saw_event(&self, event: &ShipEvent) -> bool {
        self.events.iter().any(|e| e == event)
    }

    /// Forget everything observed so far.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.events.clear();
    }
}

impl ShipObserver for RecordingObserver {
    fn on_log_entry(&mut self, entry: &LogEntry) {
        self.entries.push(entry.clone());
    }

    fn on_event(&mut self, event: &ShipEvent) {
        self.events.push(event.clone());
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ShipObserver for NullObserver {
    fn on_log_entry(&mut self, _entry: &LogEntry) {}
}
