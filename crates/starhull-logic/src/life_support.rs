//! Shipwide environmental controls.

use serde::{Deserialize, Serialize};

use crate::constants::environment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeSupport {
    /// Free-form grade label, e.g. "Nominal" or "Optimized".
    pub level: String,
    /// Percent.
    pub oxygen_level: f64,
    /// Celsius.
    pub internal_temperature: f64,
    pub gravity_plating_status: String,
    /// Percent.
    pub recycling_efficiency: f64,
}

impl LifeSupport {
    pub fn new(level: &str) -> Self {
        Self {
            level: level.to_string(),
            oxygen_level: environment::OXYGEN_LEVEL,
            internal_temperature: environment::INTERNAL_TEMPERATURE,
            gravity_plating_status: environment::GRAVITY_PLATING_STATUS.to_string(),
            recycling_efficiency: environment::RECYCLING_EFFICIENCY,
        }
    }

    pub fn adjust_oxygen(&mut self, level: f64) {
        self.oxygen_level = level;
    }

    pub fn adjust_temperature(&mut self, celsius: f64) {
        self.internal_temperature = celsius;
    }
}
