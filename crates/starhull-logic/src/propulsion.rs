//! Engines, impulse and warp, and the navigation plot.
//!
//! Impulse and warp are mutually exclusive: engaging one zeroes the other.
//! No fuel is consumed by any of these operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{navigation, MAX_WARP_FACTOR};

/// A point in ship-relative space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Why a warp request was refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WarpRefusal {
    EnginesOffline,
    ExceedsMaximum { factor: f64, max: f64 },
    /// Negative or not a number.
    OutOfRange { factor: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropulsionState {
    pub engine_type: String,
    pub fuel_level: f64,
    pub fuel_capacity: f64,
    pub engine_active: bool,
    /// Impulse speed as a fraction of light speed.
    pub speed: f64,
    pub warp_factor: f64,
    pub max_warp_factor: f64,
    pub location: Coordinates,
    pub destination: Option<Coordinates>,
    pub nav_computer_status: String,
    pub star_charts_version: String,
    pub autopilot_engaged: bool,
}

impl PropulsionState {
    /// Fully fuelled, engines cold, parked at the origin.
    pub fn new(engine_type: &str, fuel_capacity: f64) -> Self {
        Self {
            engine_type: engine_type.to_string(),
            fuel_level: fuel_capacity,
            fuel_capacity,
            engine_active: false,
            speed: 0.0,
            warp_factor: 0.0,
            max_warp_factor: MAX_WARP_FACTOR,
            location: Coordinates::default(),
            destination: None,
            nav_computer_status: navigation::COMPUTER_STATUS.to_string(),
            star_charts_version: navigation::STAR_CHARTS_VERSION.to_string(),
            autopilot_engaged: false,
        }
    }

    /// Light the engines. Needs fuel in the tanks. Returns the engine state.
    pub fn start_engine(&mut self) -> bool {
        if self.fuel_level > 0.0 {
            self.engine_active = true;
        }
        self.engine_active
    }

    pub fn stop_engine(&mut self) {
        self.engine_active = false;
        self.speed = 0.0;
        self.warp_factor = 0.0;
    }

    /// Set sub-light speed. Drops out of warp. Returns `false` with engines offline.
    pub fn set_impulse(&mut self, fraction: f64) -> bool {
        if !self.engine_active {
            return false;
        }
        self.speed = fraction;
        self.warp_factor = 0.0;
        true
    }

    pub fn engage_warp(&mut self, factor: f64) -> Result<(), WarpRefusal> {
        if !self.engine_active {
            return Err(WarpRefusal::EnginesOffline);
        }
        if factor.is_nan() || factor < 0.0 {
            return Err(WarpRefusal::OutOfRange { factor });
        }
        if factor > self.max_warp_factor {
            return Err(WarpRefusal::ExceedsMaximum {
                factor,
                max: self.max_warp_factor,
            });
        }
        self.warp_factor = factor;
        self.speed = 0.0;
        Ok(())
    }

    /// Plot a destination. Nothing moves until something else moves it.
    pub fn set_course(&mut self, destination: Coordinates) {
        self.destination = Some(destination);
    }

    pub fn is_at_warp(&self) -> bool {
        self.warp_factor > 0.0
    }
}
