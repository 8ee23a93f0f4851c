//! Sensor sweeps and communications.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::comms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanRange {
    #[default]
    Long,
    Short,
}

impl ScanRange {
    pub fn label(self) -> &'static str {
        match self {
            Self::Long => "Long-range",
            Self::Short => "Short-range",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorArray {
    pub suite: String,
    pub long_range_scan: Option<String>,
    pub short_range_scan: Option<String>,
    pub comms_channel: String,
    pub comms_encrypted: bool,
    inbox: Vec<String>,
}

impl SensorArray {
    pub fn new(suite: &str) -> Self {
        Self {
            suite: suite.to_string(),
            long_range_scan: None,
            short_range_scan: None,
            comms_channel: comms::DEFAULT_CHANNEL.to_string(),
            comms_encrypted: false,
            inbox: Vec::new(),
        }
    }

    /// Sweep at the given range, store and return the result.
    pub fn scan(&mut self, range: ScanRange, at: NaiveDateTime) -> String {
        let stamp = at.format("%Y-%m-%d %H:%M:%S%.6f");
        match range {
            ScanRange::Long => {
                let result = format!("Detected nebulas and a distant G-type star at {}", stamp);
                self.long_range_scan = Some(result.clone());
                result
            }
            ScanRange::Short => {
                let result = format!(
                    "Detected asteroids and a small Class-M planet nearby at {}",
                    stamp
                );
                self.short_range_scan = Some(result.clone());
                result
            }
        }
    }

    pub fn receive(&mut self, message: &str) {
        self.inbox.push(message.to_string());
    }

    /// Received messages, oldest first.
    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}
