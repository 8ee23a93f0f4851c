//! Crew roster and cargo hold.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub position: String,
}

/// Crew aboard, in boarding order. Names need not be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewRoster {
    members: Vec<CrewMember>,
    pub max_crew: u32,
}

impl CrewRoster {
    pub fn new(max_crew: u32) -> Self {
        Self {
            members: Vec::new(),
            max_crew,
        }
    }

    /// Take a crew member aboard. Returns `false` when at capacity.
    pub fn add(&mut self, name: &str, position: &str) -> bool {
        if self.is_full() {
            return false;
        }
        self.members.push(CrewMember {
            name: name.to_string(),
            position: position.to_string(),
        });
        true
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_crew as usize
    }

    pub fn members(&self) -> &[CrewMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Why a cargo operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CargoRefusal {
    /// Loading would exceed the hold's weight capacity.
    InsufficientSpace,
    /// The hold doesn't carry enough of the item.
    NotEnoughInHold,
    /// The unit weight gives a NaN, infinite or negative total.
    InvalidWeight,
    /// The item count would not fit in a `u32`.
    CountOverflow,
}

/// Cargo hold keyed by item name. Weight is in metric tons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoManifest {
    hold: BTreeMap<String, u32>,
    pub current_weight: f64,
    pub capacity: f64,
}

impl CargoManifest {
    pub fn new(capacity: f64) -> Self {
        Self {
            hold: BTreeMap::new(),
            current_weight: 0.0,
            capacity,
        }
    }

    /// Load `quantity` units weighing `weight_per_unit` each.
    ///
    /// Loading exactly up to capacity is allowed.
    pub fn load(
        &mut self,
        item: &str,
        quantity: u32,
        weight_per_unit: f64,
    ) -> Result<f64, CargoRefusal> {
        let total_weight = checked_weight(quantity, weight_per_unit)?;
        if self.current_weight + total_weight > self.capacity {
            return Err(CargoRefusal::InsufficientSpace);
        }
        let count = self
            .quantity(item)
            .checked_add(quantity)
            .ok_or(CargoRefusal::CountOverflow)?;
        self.hold.insert(item.to_string(), count);
        self.current_weight += total_weight;
        Ok(total_weight)
    }

    /// Remove `quantity` units of `item`. The entry disappears once empty.
    pub fn jettison(
        &mut self,
        item: &str,
        quantity: u32,
        weight_per_unit: f64,
    ) -> Result<f64, CargoRefusal> {
        let total_weight = checked_weight(quantity, weight_per_unit)?;
        let Some(stock) = self.hold.get_mut(item) else {
            return Err(CargoRefusal::NotEnoughInHold);
        };
        if *stock < quantity {
            return Err(CargoRefusal::NotEnoughInHold);
        }
        *stock -= quantity;
        if *stock == 0 {
            self.hold.remove(item);
        }
        self.current_weight = (self.current_weight - total_weight).max(0.0);
        Ok(total_weight)
    }

    pub fn quantity(&self, item: &str) -> u32 {
        self.hold.get(item).copied().unwrap_or(0)
    }

    pub fn items(&self) -> &BTreeMap<String, u32> {
        &self.hold
    }

    pub fn free_capacity(&self) -> f64 {
        (self.capacity - self.current_weight).max(0.0)
    }
}

fn checked_weight(quantity: u32, weight_per_unit: f64) -> Result<f64, CargoRefusal> {
    let total = quantity as f64 * weight_per_unit;
    if total.is_finite() && total >= 0.0 {
        Ok(total)
    } else {
        Err(CargoRefusal::InvalidWeight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_respects_capacity() {
        let mut roster = CrewRoster::new(2);
        assert!(roster.add("Jean-Luc Picard", "Captain"));
        assert!(roster.add("William Riker", "First Officer"));
        assert!(roster.is_full());
        assert!(!roster.add("Data", "Operations Officer"));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.members()[0].name, "Jean-Luc Picard");
    }

    #[test]
    fn test_roster_allows_duplicate_names() {
        let mut roster = CrewRoster::new(5);
        assert!(roster.add("Worf", "Security"));
        assert!(roster.add("Worf", "Security"));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_zero_capacity_roster() {
        let mut roster = CrewRoster::new(0);
        assert!(!roster.add("Q", "Nuisance"));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_load_accumulates() {
        let mut cargo = CargoManifest::new(50_000.0);
        assert_eq!(cargo.load("Tribbles", 10_000, 0.1), Ok(1000.0));
        assert_eq!(cargo.load("Dilithium Crystals", 50, 100.0), Ok(5000.0));
        assert_eq!(cargo.load("Tribbles", 10, 0.1), Ok(1.0));
        assert_eq!(cargo.quantity("Tribbles"), 10_010);
        assert!((cargo.current_weight - 6001.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_exactly_to_capacity() {
        let mut cargo = CargoManifest::new(100.0);
        assert!(cargo.load("Ore", 10, 10.0).is_ok());
        assert_eq!(cargo.free_capacity(), 0.0);
        assert_eq!(
            cargo.load("Ore", 1, 0.5),
            Err(CargoRefusal::InsufficientSpace)
        );
        assert_eq!(cargo.current_weight, 100.0);
        assert_eq!(cargo.quantity("Ore"), 10);
    }

    #[test]
    fn test_refused_load_leaves_hold_untouched() {
        let mut cargo = CargoManifest::new(10.0);
        assert!(cargo.load("Ore", 200, 1.0).is_err());
        assert_eq!(cargo.current_weight, 0.0);
        assert!(cargo.items().is_empty());
    }

    #[test]
    fn test_jettison() {
        let mut cargo = CargoManifest::new(1000.0);
        cargo.load("Tribbles", 100, 0.5).unwrap();
        assert_eq!(cargo.jettison("Tribbles", 40, 0.5), Ok(20.0));
        assert_eq!(cargo.quantity("Tribbles"), 60);
        assert_eq!(cargo.current_weight, 30.0);

        assert_eq!(
            cargo.jettison("Tribbles", 61, 0.5),
            Err(CargoRefusal::NotEnoughInHold)
        );
        assert_eq!(
            cargo.jettison("Kittens", 1, 0.5),
            Err(CargoRefusal::NotEnoughInHold)
        );

        assert!(cargo.jettison("Tribbles", 60, 0.5).is_ok());
        assert!(!cargo.items().contains_key("Tribbles"));
        assert_eq!(cargo.current_weight, 0.0);
    }

    #[test]
    fn test_jettison_weight_never_negative() {
        let mut cargo = CargoManifest::new(1000.0);
        cargo.load("Ore", 10, 1.0).unwrap();
        // Caller claims heavier units than were loaded.
        cargo.jettison("Ore", 10, 5.0).unwrap();
        assert_eq!(cargo.current_weight, 0.0);
    }

    #[test]
    fn test_invalid_unit_weight_is_refused() {
        let mut cargo = CargoManifest::new(50_000.0);
        for weight in [f64::NAN, f64::INFINITY, -1.0] {
            assert_eq!(
                cargo.load("Ghost", 1, weight),
                Err(CargoRefusal::InvalidWeight)
            );
        }
        assert_eq!(cargo.current_weight, 0.0);
        assert!(cargo.items().is_empty());

        assert_eq!(
            cargo.load("Neutronium", 1, 1e12),
            Err(CargoRefusal::InsufficientSpace)
        );
        cargo.load("Ore", 10, 1.0).unwrap();
        assert_eq!(
            cargo.jettison("Ore", 5, f64::NAN),
            Err(CargoRefusal::InvalidWeight)
        );
        assert_eq!(cargo.quantity("Ore"), 10);
        assert_eq!(cargo.current_weight, 10.0);
    }

    #[test]
    fn test_count_overflow_is_refused() {
        let mut cargo = CargoManifest::new(100.0);
        assert_eq!(cargo.load("Photons", u32::MAX, 0.0), Ok(0.0));
        assert_eq!(
            cargo.load("Photons", 1, 0.0),
            Err(CargoRefusal::CountOverflow)
        );
        assert_eq!(cargo.quantity("Photons"), u32::MAX);
        assert_eq!(cargo.current_weight, 0.0);
    }
}
