//! Hull integrity and deflector shields.
//!
//! Damage is absorbed by active shields first; whatever the shields can't
//! soak spills over into the hull in the same hit. Hull and shield points
//! always stay within `[0, max]`, including for negative amounts, which heal.
//! A NaN amount changes nothing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HullShieldSystem {
    pub current_hull: f64,
    pub max_hull: f64,
    pub current_shield: f64,
    pub max_shield: f64,
    pub shields_active: bool,
}

/// What a single hit did to the ship.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DamageReport {
    /// The hit landed on raised shields (rather than straight on the hull).
    pub shields_engaged: bool,
    /// Points taken off the shields.
    pub shield_absorbed: f64,
    /// Points that reached the hull.
    pub hull_damage: f64,
    /// Shields were driven to zero and dropped by this hit.
    pub shields_collapsed: bool,
    /// Hull integrity is at zero after this hit.
    pub destroyed: bool,
}

impl HullShieldSystem {
    /// A fresh system at full hull and shield strength, shields lowered.
    pub fn new(max_hull: f64, max_shield: f64) -> Self {
        Self {
            current_hull: max_hull,
            max_hull,
            current_shield: max_shield,
            max_shield,
            shields_active: false,
        }
    }

    pub fn take_damage(&mut self, amount: f64) -> DamageReport {
        let mut report = DamageReport::default();
        if amount.is_nan() {
            return report;
        }

        if !self.shields_active || self.current_shield <= 0.0 {
            report.hull_damage = amount;
            report.destroyed = self.apply_hull_damage(amount);
            return report;
        }

        report.shields_engaged = true;
        let absorbed = self.current_shield.min(amount);
        self.current_shield = (self.current_shield - absorbed).min(self.max_shield);
        report.shield_absorbed = absorbed;

        let remaining = amount - absorbed;
        if remaining > 0.0 {
            report.hull_damage = remaining;
            report.destroyed = self.apply_hull_damage(remaining);
        }

        if self.current_shield <= 0.0 {
            self.current_shield = 0.0;
            self.shields_active = false;
            report.shields_collapsed = true;
        }

        report
    }

    /// Subtract from the hull, clamping into `[0, max]`. Returns whether the
    /// hull is breached.
    fn apply_hull_damage(&mut self, amount: f64) -> bool {
        self.current_hull -= amount;
        if self.current_hull <= 0.0 {
            self.current_hull = 0.0;
            return true;
        }
        self.current_hull = self.current_hull.min(self.max_hull);
        false
    }

    /// Returns the hull points after repair.
    pub fn repair(&mut self, amount: f64) -> f64 {
        if amount.is_nan() {
            return self.current_hull;
        }
        self.current_hull = (self.current_hull + amount).clamp(0.0, self.max_hull);
        self.current_hull
    }

    /// Raise or lower shields. Raising only works with charge left in the
    /// emitters. Returns the resulting state.
    pub fn toggle(&mut self, raise: bool) -> bool {
        self.shields_active = raise && self.current_shield > 0.0;
        self.shields_active
    }

    /// Returns the shield points after recharge.
    pub fn recharge(&mut self, amount: f64) -> f64 {
        if amount.is_nan() {
            return self.current_shield;
        }
        self.current_shield = (self.current_shield + amount).clamp(0.0, self.max_shield);
        if self.current_shield <= 0.0 {
            self.shields_active = false;
        }
        self.current_shield
    }

    pub fn is_destroyed(&self) -> bool {
        self.current_hull <= 0.0
    }
}
