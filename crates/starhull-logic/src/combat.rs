//! Weapons loadout, power routing, ammunition, and target lock.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AMMUNITION, FULL_WEAPON_POWER};

/// Why a weapon didn't fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireRefusal {
    /// Not installed, or its power is routed to zero.
    Offline,
    NoAmmunition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatLoadout {
    /// Installed weapons in installation order.
    weapons: Vec<String>,
    /// Power routed to each installed weapon, in percent.
    power: BTreeMap<String, f64>,
    /// Rounds remaining for ammunition-fed weapons. Weapons absent from this
    /// map draw on ship's power and never run dry.
    ammunition: BTreeMap<String, u32>,
    pub target_lock: Option<String>,
    pub in_combat: bool,
}

impl CombatLoadout {
    /// Install `weapons` at full power. Repeated names are installed once.
    pub fn new<S: AsRef<str>>(weapons: &[S]) -> Self {
        let mut installed: Vec<String> = Vec::with_capacity(weapons.len());
        for w in weapons {
            let w = w.as_ref();
            if !installed.iter().any(|i| i == w) {
                installed.push(w.to_string());
            }
        }
        let power = installed
            .iter()
            .map(|w| (w.clone(), FULL_WEAPON_POWER))
            .collect();
        let ammunition = DEFAULT_AMMUNITION
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect();
        Self {
            weapons: installed,
            power,
            ammunition,
            target_lock: None,
            in_combat: false,
        }
    }

    pub fn weapons(&self) -> &[String] {
        &self.weapons
    }

    pub fn is_installed(&self, weapon: &str) -> bool {
        self.weapons.iter().any(|w| w == weapon)
    }

    pub fn power(&self, weapon: &str) -> Option<f64> {
        self.power.get(weapon).copied()
    }

    /// Rounds left, or `None` for weapons that don't use ammunition.
    pub fn ammunition(&self, weapon: &str) -> Option<u32> {
        self.ammunition.get(weapon).copied()
    }

    /// Route power to an installed weapon, clamped to 0–100 percent.
    /// Returns the level applied.
    pub fn set_power(&mut self, weapon: &str, percent: f64) -> Option<f64> {
        let level = self.power.get_mut(weapon)?;
        *level = percent.clamp(0.0, FULL_WEAPON_POWER);
        Some(*level)
    }

    pub fn lock_target(&mut self, signature: &str) {
        self.target_lock = Some(signature.to_string());
        self.in_combat = true;
    }

    /// Fire once, spending a round if the weapon is ammunition-fed.
    pub fn fire(&mut self, weapon: &str) -> Result<(), FireRefusal> {
        let powered = self.power(weapon).is_some_and(|p| p > 0.0);
        if !self.is_installed(weapon) || !powered {
            return Err(FireRefusal::Offline);
        }
        if let Some(rounds) = self.ammunition.get_mut(weapon) {
            if *rounds == 0 {
                return Err(FireRefusal::NoAmmunition);
            }
            *rounds -= 1;
        }
        self.in_combat = true;
        Ok(())
    }
}
