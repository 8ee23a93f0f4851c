//! Vessel construction parameters and their validation.
//!
//! A [`VesselConfig`] carries the twelve commissioning parameters in the
//! order a shipyard fills them in. It can be built in code or loaded from
//! JSON:
//!
//! ```
//! use starhull_logic::config::{validate_config, VesselConfig};
//!
//! let mut config = VesselConfig::default();
//! config.name = "USS Defiant".into();
//! config.max_crew_capacity = 50;
//! assert!(validate_config(&config).is_empty());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselConfig {
    pub name: String,
    pub ship_class: String,
    pub max_hull_points: f64,
    pub max_shield_points: f64,
    pub max_crew_capacity: u32,
    /// Metric tons.
    pub cargo_capacity: f64,
    pub fuel_capacity: f64,
    pub engine_type: String,
    pub weapon_systems: Vec<String>,
    pub sensor_suite: String,
    pub life_support_level: String,
    pub coffee_machine_model: String,
}

impl Default for VesselConfig {
    /// The demonstration dreadnought.
    fn default() -> Self {
        Self {
            name: "The Colossus".into(),
            ship_class: "Galaxy-Dreadnought-Espresso-Carrier".into(),
            max_hull_points: 5000.0,
            max_shield_points: 10000.0,
            max_crew_capacity: 1015,
            cargo_capacity: 50000.0,
            fuel_capacity: 100000.0,
            engine_type: "Dilithium-Powered Warp/Impulse Fusion".into(),
            weapon_systems: vec![
                "Phasers".into(),
                "Photon Torpedoes".into(),
                "Disruptor Cannons".into(),
            ],
            sensor_suite: "Argus Array Mk V".into(),
            life_support_level: "Optimized".into(),
            coffee_machine_model: "BaristaBot 9000".into(),
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyShipName,
    /// A hull, shield, cargo, or fuel maximum is negative or not finite.
    InvalidCapacity { field: &'static str, value: f64 },
    /// A weapon name is blank.
    EmptyWeaponName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyShipName => write!(f, "Ship name must not be empty"),
            ConfigError::InvalidCapacity { field, value } => {
                write!(f, "{} must be a finite non-negative number, got {}", field, value)
            }
            ConfigError::EmptyWeaponName => write!(f, "Weapon names must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validate a vessel configuration, returning all errors found.
pub fn validate_config(config: &VesselConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.name.trim().is_empty() {
        errors.push(ConfigError::EmptyShipName);
    }

    let capacities = [
        ("max_hull_points", config.max_hull_points),
        ("max_shield_points", config.max_shield_points),
        ("cargo_capacity", config.cargo_capacity),
        ("fuel_capacity", config.fuel_capacity),
    ];
    for (field, value) in capacities {
        if !value.is_finite() || value < 0.0 {
            errors.push(ConfigError::InvalidCapacity { field, value });
        }
    }

    if config.weapon_systems.iter().any(|w| w.trim().is_empty()) {
        errors.push(ConfigError::EmptyWeaponName);
    }

    errors
}
