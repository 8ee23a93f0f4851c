//! Vessel state and operations for Starhull.
//!
//! A single spaceship, split into small owned components that sit inside one
//! aggregate root. Everything is synchronous and in-process: operations
//! mutate state, append to the ship's log, and notify an injected observer.
//! Nothing here returns an error for a refused action; refusals are logged.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`amenities`] | Coffee machine, holodeck, self-destruct interlock |
//! | [`combat`] | Weapons loadout, power routing, ammunition, target lock |
//! | [`config`] | Commissioning parameters and validation |
//! | [`constants`] | Fixed defaults and thresholds |
//! | [`hull`] | Hull integrity and shield absorption |
//! | [`life_support`] | Oxygen, temperature, recycling |
//! | [`manifest`] | Crew roster and cargo hold |
//! | [`observer`] | Observer trait and console/recording/null observers |
//! | [`propulsion`] | Engines, impulse, warp, course plotting |
//! | [`report`] | Status report snapshot and its text layout |
//! | [`sensors`] | Sensor sweeps, comms channel, inbox |
//! | [`ships_log`] | Append-only timestamped ship's log |
//! | [`vessel`] | The aggregate root tying it all together |

pub mod amenities;
pub mod combat;
pub mod config;
pub mod constants;
pub mod hull;
pub mod life_support;
pub mod manifest;
pub mod observer;
pub mod propulsion;
pub mod report;
pub mod sensors;
pub mod ships_log;
pub mod vessel;

pub use config::VesselConfig;
pub use vessel::Vessel;
