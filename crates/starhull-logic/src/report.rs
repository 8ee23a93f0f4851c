//! Full status report: a read-only snapshot of the vessel and its
//! fixed human-readable layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::REPORT_RULE_WIDTH;
use crate::propulsion::Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub name: String,
    pub ship_class: String,
    pub hull: f64,
    pub max_hull: f64,
    pub shield: f64,
    pub max_shield: f64,
    pub shields_active: bool,
    pub crew: usize,
    pub max_crew: u32,
    pub cargo_weight: f64,
    pub cargo_capacity: f64,
    pub fuel_level: f64,
    pub fuel_capacity: f64,
    pub engine_type: String,
    pub engine_active: bool,
    pub warp_factor: f64,
    pub impulse_speed: f64,
    pub location: Coordinates,
    pub destination: Option<Coordinates>,
    pub weapons: Vec<String>,
    pub target: Option<String>,
    pub life_support_level: String,
    pub oxygen_level: f64,
    pub internal_temperature: f64,
    pub coffee_level: f64,
    pub holodeck_in_use: bool,
    pub self_destruct_armed: bool,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(REPORT_RULE_WIDTH);
        let destination = self
            .destination
            .map_or_else(|| "None".to_string(), |d| d.to_string());

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "       STATUS REPORT: {}       ", self.name)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Class: {}", self.ship_class)?;
        writeln!(f, "Hull: {}/{}", self.hull, self.max_hull)?;
        writeln!(
            f,
            "Shields: {}/{} (Active: {})",
            self.shield, self.max_shield, self.shields_active
        )?;
        writeln!(f, "Crew: {}/{}", self.crew, self.max_crew)?;
        writeln!(
            f,
            "Cargo: {}/{} tons",
            self.cargo_weight, self.cargo_capacity
        )?;
        writeln!(f, "Fuel: {:.2}/{}", self.fuel_level, self.fuel_capacity)?;
        writeln!(
            f,
            "Engines: {} (Active: {})",
            self.engine_type, self.engine_active
        )?;
        writeln!(
            f,
            "Speed: Warp {} / Impulse {}",
            self.warp_factor, self.impulse_speed
        )?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Destination: {}", destination)?;
        writeln!(f, "Weapons: {}", self.weapons.join(", "))?;
        writeln!(f, "Target: {}", self.target.as_deref().unwrap_or("None"))?;
        writeln!(
            f,
            "Life Support: {} (O2: {}%, Temp: {}°C)",
            self.life_support_level, self.oxygen_level, self.internal_temperature
        )?;
        writeln!(f, "Coffee Level: {}%", self.coffee_level)?;
        writeln!(
            f,
            "Holodeck: {}",
            if self.holodeck_in_use { "In use" } else { "Idle" }
        )?;
        writeln!(
            f,
            "Self Destruct: {}",
            if self.self_destruct_armed {
                "ARMED"
            } else {
                "Safe"
            }
        )?;
        writeln!(f, "{}", rule)?;
        writeln!(f)
    }
}
