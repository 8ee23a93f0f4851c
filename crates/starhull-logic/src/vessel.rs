//! The vessel aggregate root.
//!
//! [`Vessel`] owns one of each ship component and is the only way to mutate
//! them. Components return outcome values; the vessel turns those into
//! ship's-log lines and observer events. No operation returns an error:
//! refusals are logged and reported through `bool`/`Option` returns, and
//! hull breach is reported as a [`DamageReport`] plus a
//! [`ShipEvent::Destroyed`] event.
//!
//! ```
//! use starhull_logic::config::VesselConfig;
//! use starhull_logic::observer::RecordingObserver;
//! use starhull_logic::vessel::Vessel;
//!
//! let mut ship = Vessel::with_observer(VesselConfig::default(), RecordingObserver::new());
//! ship.toggle_shields(true);
//! ship.take_damage(3500.0);
//! assert_eq!(ship.hull().current_shield, 6500.0);
//! assert_eq!(ship.hull().current_hull, 5000.0);
//! ```

use chrono::Local;

use crate::amenities::{CoffeeMachine, Holodeck, SelfDestruct};
use crate::combat::{CombatLoadout, FireRefusal};
use crate::config::{validate_config, ConfigError, VesselConfig};
use crate::constants::coffee;
use crate::hull::{DamageReport, HullShieldSystem};
use crate::life_support::LifeSupport;
use crate::manifest::{CargoManifest, CargoRefusal, CrewRoster};
use crate::observer::{ConsoleObserver, ShipEvent, ShipObserver};
use crate::propulsion::{Coordinates, PropulsionState, WarpRefusal};
use crate::report::StatusReport;
use crate::sensors::{ScanRange, SensorArray};
use crate::ships_log::{LogEntry, ShipsLog};

pub struct Vessel<O: ShipObserver = ConsoleObserver> {
    name: String,
    ship_class: String,
    hull: HullShieldSystem,
    crew: CrewRoster,
    cargo: CargoManifest,
    propulsion: PropulsionState,
    combat: CombatLoadout,
    sensors: SensorArray,
    life_support: LifeSupport,
    coffee: CoffeeMachine,
    holodeck: Holodeck,
    self_destruct: SelfDestruct,
    log: ShipsLog,
    observer: O,
}

impl Vessel<ConsoleObserver> {
    /// Commission a vessel that mirrors its log to stdout.
    pub fn new(config: VesselConfig) -> Self {
        Self::with_observer(config, ConsoleObserver)
    }

    pub fn try_new(config: VesselConfig) -> Result<Self, Vec<ConfigError>> {
        Self::try_with_observer(config, ConsoleObserver)
    }
}

impl<O: ShipObserver> Vessel<O> {
    /// Commission a vessel reporting to `observer`.
    ///
    /// Hull, shields and fuel start at their maxima; every installed weapon
    /// starts at full power.
    pub fn with_observer(config: VesselConfig, observer: O) -> Self {
        let mut vessel = Self {
            hull: HullShieldSystem::new(config.max_hull_points, config.max_shield_points),
            crew: CrewRoster::new(config.max_crew_capacity),
            cargo: CargoManifest::new(config.cargo_capacity),
            propulsion: PropulsionState::new(&config.engine_type, config.fuel_capacity),
            combat: CombatLoadout::new(&config.weapon_systems),
            sensors: SensorArray::new(&config.sensor_suite),
            life_support: LifeSupport::new(&config.life_support_level),
            coffee: CoffeeMachine::new(&config.coffee_machine_model),
            holodeck: Holodeck::default(),
            self_destruct: SelfDestruct::default(),
            log: ShipsLog::new(),
            name: config.name,
            ship_class: config.ship_class,
            observer,
        };

        log::info!(
            "Commissioned {} ({}-class): hull={}, shields={}, crew capacity={}",
            vessel.name,
            vessel.ship_class,
            vessel.hull.max_hull,
            vessel.hull.max_shield,
            vessel.crew.max_crew
        );
        vessel.emit(ShipEvent::Commissioned {
            name: vessel.name.clone(),
            ship_class: vessel.ship_class.clone(),
        });
        vessel.log_entry("Ship constructed.");
        vessel
    }

    /// Validate `config` before commissioning.
    pub fn try_with_observer(config: VesselConfig, observer: O) -> Result<Self, Vec<ConfigError>> {
        let errors = validate_config(&config);
        if !errors.is_empty() {
            log::warn!("Refusing to commission {}: {} config errors", config.name, errors.len());
            return Err(errors);
        }
        Ok(Self::with_observer(config, observer))
    }

    // ── Log & observer ──────────────────────────────────────────────────

    /// Append a timestamped line to the ship's log and forward it to the observer.
    pub fn log_entry(&mut self, message: impl Into<String>) {
        let entry = LogEntry::now(message);
        log::debug!("{}", entry);
        self.observer.on_log_entry(&entry);
        self.log.append(entry);
    }

    fn emit(&mut self, event: ShipEvent) {
        self.observer.on_event(&event);
    }

    /// Log a refused action, mirroring it as a warning.
    fn refuse(&mut self, message: String) {
        log::warn!("{}: {}", self.name, message);
        self.log_entry(message);
    }

    // ── Hull & shields ──────────────────────────────────────────────────

    pub fn take_damage(&mut self, amount: f64) -> DamageReport {
        let report = self.hull.take_damage(amount);

        if report.shields_engaged {
            self.log_entry(format!("Shields absorbed {} damage.", report.shield_absorbed));
            if report.hull_damage > 0.0 {
                self.log_entry(format!(
                    "Took {} hull damage through shields.",
                    report.hull_damage
                ));
            }
            if report.shields_collapsed {
                self.log_entry("Shields are down!");
            }
        } else {
            self.log_entry(format!("Took {} hull damage.", report.hull_damage));
        }

        if report.destroyed {
            log::warn!("{} destroyed", self.name);
            self.log_entry("HULL BREACH! SHIP DESTROYED!");
            self.emit(ShipEvent::Destroyed);
        }
        report
    }

    pub fn repair_hull(&mut self, amount: f64) {
        let hull = self.hull.repair(amount);
        self.log_entry(format!("Hull repaired by {} points. Current: {}", amount, hull));
    }

    pub fn toggle_shields(&mut self, raise: bool) {
        if self.hull.toggle(raise) {
            self.log_entry("Shields up!");
        } else {
            self.log_entry("Shields down!");
        }
    }

    pub fn recharge_shields(&mut self, amount: f64) {
        let shield = self.hull.recharge(amount);
        self.log_entry(format!("Shields recharged to {}.", shield));
    }

    // ── Crew & cargo ────────────────────────────────────────────────────

    pub fn add_crew_member(&mut self, name: &str, position: &str) -> bool {
        if self.crew.add(name, position) {
            self.log_entry(format!("Crew member {} ({}) has come aboard.", name, position));
            true
        } else {
            self.refuse("Cannot add crew, capacity reached.".to_string());
            false
        }
    }

    pub fn load_cargo(&mut self, item: &str, quantity: u32, weight_per_unit: f64) -> bool {
        match self.cargo.load(item, quantity, weight_per_unit) {
            Ok(_) => {
                self.log_entry(format!("Loaded {} units of {}.", quantity, item));
                true
            }
            Err(refusal) => {
                self.refuse(match refusal {
                    CargoRefusal::InvalidWeight => {
                        format!("Cannot load {}, invalid unit weight.", item)
                    }
                    CargoRefusal::CountOverflow => {
                        format!("Cannot load {}, too many units to count.", item)
                    }
                    CargoRefusal::InsufficientSpace | CargoRefusal::NotEnoughInHold => {
                        format!("Cannot load {}, insufficient cargo space.", item)
                    }
                });
                false
            }
        }
    }

    pub fn jettison_cargo(&mut self, item: &str, quantity: u32, weight_per_unit: f64) -> bool {
        match self.cargo.jettison(item, quantity, weight_per_unit) {
            Ok(_) => {
                self.log_entry(format!("Jettisoned {} units of {}.", quantity, item));
                true
            }
            Err(CargoRefusal::InvalidWeight) => {
                self.refuse(format!("Cannot jettison {}, invalid unit weight.", item));
                false
            }
            Err(_) => {
                self.refuse(format!("Cannot jettison {}, not enough in hold.", item));
                false
            }
        }
    }

    // ── Engines & navigation ────────────────────────────────────────────

    pub fn start_engine(&mut self) {
        if self.propulsion.start_engine() {
            self.log_entry("Engines started.");
        } else {
            self.refuse("Cannot start engines, no fuel.".to_string());
        }
    }

    pub fn stop_engine(&mut self) {
        self.propulsion.stop_engine();
        self.log_entry("Engines stopped.");
    }

    pub fn set_impulse_speed(&mut self, fraction: f64) {
        if self.propulsion.set_impulse(fraction) {
            self.log_entry(format!("Impulse speed set to {}.", fraction));
        } else {
            self.refuse("Cannot set speed, engines offline.".to_string());
        }
    }

    pub fn engage_warp(&mut self, factor: f64) {
        match self.propulsion.engage_warp(factor) {
            Ok(()) => self.log_entry(format!("Warp factor {} engaged!", factor)),
            Err(WarpRefusal::EnginesOffline) => {
                self.refuse("Cannot engage warp, engines offline.".to_string())
            }
            Err(WarpRefusal::ExceedsMaximum { factor, .. }) => {
                self.refuse(format!("Cannot engage warp factor {}, exceeds maximum.", factor))
            }
            Err(WarpRefusal::OutOfRange { factor }) => {
                self.refuse(format!("Cannot engage warp factor {}, out of range.", factor))
            }
        }
    }

    pub fn set_course(&mut self, x: f64, y: f64, z: f64) {
        let destination = Coordinates::new(x, y, z);
        self.propulsion.set_course(destination);
        self.log_entry(format!("Course set for coordinates: {}.", destination));
    }

    // ── Combat ──────────────────────────────────────────────────────────

    pub fn lock_target(&mut self, signature: &str) {
        self.combat.lock_target(signature);
        self.log_entry(format!("Target {} locked.", signature));
    }

    pub fn fire_weapon(&mut self, weapon: &str, target: &str) -> bool {
        match self.combat.fire(weapon) {
            Ok(()) => {
                self.log_entry(format!("Firing {} at {}!", weapon, target));
                self.emit(ShipEvent::WeaponFired {
                    weapon: weapon.to_string(),
                });
                true
            }
            Err(FireRefusal::NoAmmunition) => {
                self.refuse(format!("Cannot fire {}, no ammunition.", weapon));
                false
            }
            Err(FireRefusal::Offline) => {
                self.refuse(format!(
                    "Cannot fire {}, system offline or not equipped.",
                    weapon
                ));
                false
            }
        }
    }

    /// Route power (0–100%) to an installed weapon.
    pub fn set_weapon_power(&mut self, weapon: &str, percent: f64) -> bool {
        match self.combat.set_power(weapon, percent) {
            Some(level) => {
                self.log_entry(format!("{} power set to {}%.", weapon, level));
                true
            }
            None => {
                self.refuse(format!("Cannot route power to {}, not equipped.", weapon));
                false
            }
        }
    }

    // ── Sensors & comms ─────────────────────────────────────────────────

    /// Sweep at `range` (long range when `None`) and return the findings.
    pub fn perform_scan(&mut self, range: Option<ScanRange>) -> String {
        let range = range.unwrap_or_default();
        let result = self.sensors.scan(range, Local::now().naive_local());
        self.log_entry(format!("{} scan completed.", range.label()));
        result
    }

    pub fn send_hail(&mut self, message: &str, target_ship: &str) {
        self.log_entry(format!("Hailing {}: '{}'", target_ship, message));
        self.emit(ShipEvent::HailSent {
            message: message.to_string(),
        });
    }

    pub fn receive_message(&mut self, message: &str) {
        self.sensors.receive(message);
        self.log_entry(format!("Incoming transmission: '{}'", message));
    }

    // ── Life support ────────────────────────────────────────────────────

    pub fn adjust_oxygen(&mut self, level: f64) {
        self.life_support.adjust_oxygen(level);
        self.log_entry(format!("Oxygen adjusted to {}%.", level));
    }

    pub fn adjust_temperature(&mut self, celsius: f64) {
        self.life_support.adjust_temperature(celsius);
        self.log_entry(format!("Temperature set to {}°C.", celsius));
    }

    // ── Coffee & holodeck ───────────────────────────────────────────────

    /// Brew a cup. `None` brews [`coffee::DEFAULT_STRENGTH`].
    ///
    /// Returns the cup, or `None` once the reservoir is down to the last 5%.
    pub fn brew_coffee(&mut self, strength: Option<&str>) -> Option<&'static str> {
        let strength = strength.unwrap_or(coffee::DEFAULT_STRENGTH);
        if self.coffee.brew() {
            self.log_entry(format!(
                "Brewing a {} coffee. Ahh, essential for deep space travel.",
                strength
            ));
            Some(coffee::CUP)
        } else {
            self.refuse("CRITICAL ERROR: Coffee depleted! Morale dropping!".to_string());
            None
        }
    }

    pub fn start_holodeck_program(&mut self, program: &str) {
        if self.holodeck.start(program) {
            self.log_entry(format!("Holodeck program '{}' initiated. Enjoy!", program));
        } else {
            self.refuse("Holodeck already in use.".to_string());
        }
    }

    pub fn stop_holodeck_program(&mut self) {
        match self.holodeck.stop() {
            Some(program) => self.log_entry(format!("Holodeck program '{}' ended.", program)),
            None => self.refuse("Holodeck is not currently active.".to_string()),
        }
    }

    // ── Self-destruct ───────────────────────────────────────────────────

    pub fn initiate_self_destruct(&mut self, code: &str) {
        if self.self_destruct.initiate(code) {
            log::warn!("{} self-destruct armed", self.name);
            self.log_entry("WARNING: Self-destruct sequence initiated! T-minus 5 minutes.");
            self.emit(ShipEvent::SelfDestructArmed);
        } else {
            self.refuse("Invalid self-destruct code. Sequence aborted.".to_string());
        }
    }

    pub fn abort_self_destruct(&mut self) {
        if self.self_destruct.abort() {
            self.log_entry("Self-destruct sequence aborted. Phew!");
        } else {
            self.refuse("No self-destruct sequence active.".to_string());
        }
    }

    // ── Status ──────────────────────────────────────────────────────────

    /// Snapshot everything the status report shows. Changes nothing.
    pub fn full_status_report(&self) -> StatusReport {
        StatusReport {
            name: self.name.clone(),
            ship_class: self.ship_class.clone(),
            hull: self.hull.current_hull,
            max_hull: self.hull.max_hull,
            shield: self.hull.current_shield,
            max_shield: self.hull.max_shield,
            shields_active: self.hull.shields_active,
            crew: self.crew.len(),
            max_crew: self.crew.max_crew,
            cargo_weight: self.cargo.current_weight,
            cargo_capacity: self.cargo.capacity,
            fuel_level: self.propulsion.fuel_level,
            fuel_capacity: self.propulsion.fuel_capacity,
            engine_type: self.propulsion.engine_type.clone(),
            engine_active: self.propulsion.engine_active,
            warp_factor: self.propulsion.warp_factor,
            impulse_speed: self.propulsion.speed,
            location: self.propulsion.location,
            destination: self.propulsion.destination,
            weapons: self.combat.weapons().to_vec(),
            target: self.combat.target_lock.clone(),
            life_support_level: self.life_support.level.clone(),
            oxygen_level: self.life_support.oxygen_level,
            internal_temperature: self.life_support.internal_temperature,
            coffee_level: self.coffee.level,
            holodeck_in_use: self.holodeck.in_use(),
            self_destruct_armed: self.self_destruct.armed,
        }
    }

    /// Print the full status report to stdout.
    pub fn print_status_report(&self) {
        print!("{}", self.full_status_report());
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ship_class(&self) -> &str {
        &self.ship_class
    }

    pub fn hull(&self) -> &HullShieldSystem {
        &self.hull
    }

    pub fn crew(&self) -> &CrewRoster {
        &self.crew
    }

    pub fn cargo(&self) -> &CargoManifest {
        &self.cargo
    }

    pub fn propulsion(&self) -> &PropulsionState {
        &self.propulsion
    }

    pub fn combat(&self) -> &CombatLoadout {
        &self.combat
    }

    pub fn sensors(&self) -> &SensorArray {
        &self.sensors
    }

    pub fn life_support(&self) -> &LifeSupport {
        &self.life_support
    }

    pub fn coffee_machine(&self) -> &CoffeeMachine {
        &self.coffee
    }

    pub fn holodeck(&self) -> &Holodeck {
        &self.holodeck
    }

    pub fn self_destruct(&self) -> &SelfDestruct {
        &self.self_destruct
    }

    pub fn ships_log(&self) -> &ShipsLog {
        &self.log
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn is_destroyed(&self) -> bool {
        self.hull.is_destroyed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;

    fn colossus() -> Vessel<RecordingObserver> {
        Vessel::with_observer(VesselConfig::default(), RecordingObserver::new())
    }

    fn small_ship() -> Vessel<RecordingObserver> {
        let config = VesselConfig {
            name: "Runabout".into(),
            ship_class: "Danube".into(),
            max_hull_points: 100.0,
            max_shield_points: 30.0,
            max_crew_capacity: 2,
            cargo_capacity: 10.0,
            fuel_capacity: 50.0,
            ..Default::default()
        };
        Vessel::with_observer(config, RecordingObserver::new())
    }

    fn last_message<O: ShipObserver>(ship: &Vessel<O>) -> &str {
        ship.ships_log()
            .last()
            .map(|e| e.message.as_str())
            .unwrap_or("")
    }

    #[test]
    fn test_construction() {
        let ship = colossus();
        assert_eq!(ship.name(), "The Colossus");
        assert_eq!(ship.hull().current_hull, 5000.0);
        assert_eq!(ship.hull().current_shield, 10000.0);
        assert_eq!(ship.propulsion().fuel_level, 100000.0);
        assert_eq!(ship.coffee_machine().level, 100.0);
        assert_eq!(ship.life_support().oxygen_level, 98.0);
        assert_eq!(ship.combat().power("Disruptor Cannons"), Some(100.0));
        assert_eq!(ship.ships_log().len(), 1);
        assert_eq!(last_message(&ship), "Ship constructed.");
        assert!(matches!(
            ship.observer().events.first(),
            Some(ShipEvent::Commissioned { .. })
        ));
    }

    #[test]
    fn test_observer_mirrors_log() {
        let mut ship = colossus();
        ship.start_engine();
        ship.toggle_shields(true);
        let logged: Vec<_> = ship.ships_log().messages().collect();
        assert_eq!(ship.observer().messages(), logged);
    }

    #[test]
    fn test_damage_split_through_shields() {
        let mut ship = small_ship();
        ship.toggle_shields(true);
        let report = ship.take_damage(50.0);
        assert_eq!(report.shield_absorbed, 30.0);
        assert_eq!(report.hull_damage, 20.0);
        assert_eq!(ship.hull().current_shield, 0.0);
        assert!(!ship.hull().shields_active);
        assert_eq!(ship.hull().current_hull, 80.0);

        let messages = ship.observer().messages();
        let tail = &messages[messages.len() - 3..];
        assert_eq!(
            tail,
            [
                "Shields absorbed 30 damage.",
                "Took 20 hull damage through shields.",
                "Shields are down!"
            ]
        );
    }

    #[test]
    fn test_destruction_is_an_event_not_an_error() {
        let mut ship = small_ship();
        let report = ship.take_damage(1000.0);
        assert!(report.destroyed);
        assert!(ship.is_destroyed());
        assert_eq!(ship.hull().current_hull, 0.0);
        assert_eq!(last_message(&ship), "HULL BREACH! SHIP DESTROYED!");
        assert!(ship.observer().saw_event(&ShipEvent::Destroyed));

        // Combat remains callable after destruction.
        ship.lock_target("Borg Cube");
        assert!(ship.fire_weapon("Phasers", "Borg Cube"));
    }

    #[test]
    fn test_toggle_shields_logs_result() {
        let mut ship = colossus();
        ship.toggle_shields(true);
        assert_eq!(last_message(&ship), "Shields up!");
        ship.toggle_shields(false);
        assert_eq!(last_message(&ship), "Shields down!");
    }

    #[test]
    fn test_toggle_shields_without_charge() {
        let config = VesselConfig {
            max_shield_points: 0.0,
            ..Default::default()
        };
        let mut ship = Vessel::with_observer(config, RecordingObserver::new());
        ship.toggle_shields(true);
        assert!(!ship.hull().shields_active);
        assert_eq!(last_message(&ship), "Shields down!");
    }

    #[test]
    fn test_repair_and_recharge_messages() {
        let mut ship = colossus();
        ship.take_damage(1000.0);
        ship.repair_hull(250.0);
        assert_eq!(last_message(&ship), "Hull repaired by 250 points. Current: 4250");
        ship.toggle_shields(true);
        ship.take_damage(3500.0);
        ship.recharge_shields(1000.0);
        assert_eq!(last_message(&ship), "Shields recharged to 7500.");
    }

    #[test]
    fn test_crew_capacity() {
        let mut ship = small_ship();
        assert!(ship.add_crew_member("Julian Bashir", "Doctor"));
        assert!(ship.add_crew_member("Miles O'Brien", "Chief of Operations"));
        assert!(!ship.add_crew_member("Garak", "Tailor"));
        assert_eq!(ship.crew().len(), 2);
        assert_eq!(last_message(&ship), "Cannot add crew, capacity reached.");
    }

    #[test]
    fn test_cargo_load_and_jettison() {
        let mut ship = small_ship();
        assert!(ship.load_cargo("Self-sealing stem bolts", 8, 1.0));
        assert_eq!(last_message(&ship), "Loaded 8 units of Self-sealing stem bolts.");
        assert!(!ship.load_cargo("Yamok sauce", 3, 1.0));
        assert_eq!(ship.cargo().current_weight, 8.0);
        assert_eq!(
            last_message(&ship),
            "Cannot load Yamok sauce, insufficient cargo space."
        );

        assert!(ship.jettison_cargo("Self-sealing stem bolts", 8, 1.0));
        assert_eq!(ship.cargo().current_weight, 0.0);
        assert!(!ship.jettison_cargo("Self-sealing stem bolts", 1, 1.0));
        assert_eq!(
            last_message(&ship),
            "Cannot jettison Self-sealing stem bolts, not enough in hold."
        );
    }

    #[test]
    fn test_cargo_refusal_messages() {
        let mut ship = colossus();
        assert!(!ship.load_cargo("Ghost", 1, f64::NAN));
        assert_eq!(last_message(&ship), "Cannot load Ghost, invalid unit weight.");
        assert!(!ship.load_cargo("Neutronium", 1, 1e12));
        assert_eq!(ship.cargo().current_weight, 0.0);

        assert!(ship.load_cargo("Photons", u32::MAX, 0.0));
        assert!(!ship.load_cargo("Photons", 1, 0.0));
        assert_eq!(last_message(&ship), "Cannot load Photons, too many units to count.");
        assert_eq!(ship.cargo().quantity("Photons"), u32::MAX);

        assert!(!ship.jettison_cargo("Photons", 1, f64::INFINITY));
        assert_eq!(last_message(&ship), "Cannot jettison Photons, invalid unit weight.");
    }

    #[test]
    fn test_warp_without_engine() {
        let mut ship = colossus();
        ship.engage_warp(7.0);
        assert_eq!(ship.propulsion().warp_factor, 0.0);
        assert_eq!(last_message(&ship), "Cannot engage warp, engines offline.");
    }

    #[test]
    fn test_warp_exceeding_maximum() {
        let mut ship = colossus();
        ship.start_engine();
        ship.engage_warp(10.0);
        assert_eq!(ship.propulsion().warp_factor, 0.0);
        assert_eq!(
            last_message(&ship),
            "Cannot engage warp factor 10, exceeds maximum."
        );
        ship.engage_warp(7.0);
        assert_eq!(ship.propulsion().warp_factor, 7.0);
        assert_eq!(last_message(&ship), "Warp factor 7 engaged!");
    }

    #[test]
    fn test_engine_needs_fuel() {
        let config = VesselConfig {
            fuel_capacity: 0.0,
            ..Default::default()
        };
        let mut ship = Vessel::with_observer(config, RecordingObserver::new());
        ship.start_engine();
        assert!(!ship.propulsion().engine_active);
        assert_eq!(last_message(&ship), "Cannot start engines, no fuel.");
    }

    #[test]
    fn test_impulse_speed() {
        let mut ship = colossus();
        ship.set_impulse_speed(0.5);
        assert_eq!(last_message(&ship), "Cannot set speed, engines offline.");
        ship.start_engine();
        ship.engage_warp(5.0);
        ship.set_impulse_speed(0.25);
        assert_eq!(ship.propulsion().speed, 0.25);
        assert_eq!(ship.propulsion().warp_factor, 0.0);
        assert_eq!(last_message(&ship), "Impulse speed set to 0.25.");
    }

    #[test]
    fn test_set_course() {
        let mut ship = colossus();
        ship.set_course(100.0, 250.0, -50.0);
        assert_eq!(
            ship.propulsion().destination,
            Some(Coordinates::new(100.0, 250.0, -50.0))
        );
        assert_eq!(
            last_message(&ship),
            "Course set for coordinates: (100, 250, -50)."
        );
    }

    #[test]
    fn test_fire_weapon_messages_and_events() {
        let mut ship = colossus();
        assert!(ship.fire_weapon("Photon Torpedoes", "Hostile Bird-of-Prey"));
        assert_eq!(
            last_message(&ship),
            "Firing Photon Torpedoes at Hostile Bird-of-Prey!"
        );
        assert_eq!(ship.combat().ammunition("Photon Torpedoes"), Some(49));
        assert!(ship.observer().saw_event(&ShipEvent::WeaponFired {
            weapon: "Photon Torpedoes".into()
        }));

        assert!(!ship.fire_weapon("Tractor Beam", "Hostile Bird-of-Prey"));
        assert_eq!(
            last_message(&ship),
            "Cannot fire Tractor Beam, system offline or not equipped."
        );
    }

    #[test]
    fn test_weapon_power_routing() {
        let mut ship = colossus();
        assert!(ship.set_weapon_power("Phasers", 0.0));
        assert_eq!(last_message(&ship), "Phasers power set to 0%.");
        assert!(!ship.fire_weapon("Phasers", "Drone"));
        assert!(!ship.set_weapon_power("Deflector Dish", 50.0));
    }

    #[test]
    fn test_scans() {
        let mut ship = colossus();
        let long = ship.perform_scan(None);
        assert!(long.starts_with("Detected nebulas"));
        assert_eq!(last_message(&ship), "Long-range scan completed.");
        ship.perform_scan(Some(ScanRange::Short));
        assert_eq!(last_message(&ship), "Short-range scan completed.");
        assert!(ship.sensors().short_range_scan.is_some());
    }

    #[test]
    fn test_comms() {
        let mut ship = colossus();
        ship.send_hail("Surrender now!", "Hostile Bird-of-Prey");
        assert_eq!(
            last_message(&ship),
            "Hailing Hostile Bird-of-Prey: 'Surrender now!'"
        );
        assert!(ship.observer().saw_event(&ShipEvent::HailSent {
            message: "Surrender now!".into()
        }));
        ship.receive_message("We will not surrender.");
        assert_eq!(ship.sensors().inbox(), ["We will not surrender."]);
    }

    #[test]
    fn test_life_support_adjustments() {
        let mut ship = colossus();
        ship.adjust_oxygen(95.0);
        assert_eq!(last_message(&ship), "Oxygen adjusted to 95%.");
        ship.adjust_temperature(19.5);
        assert_eq!(last_message(&ship), "Temperature set to 19.5°C.");
        assert_eq!(ship.life_support().internal_temperature, 19.5);
    }

    #[test]
    fn test_coffee_default_strength() {
        let mut ship = colossus();
        assert_eq!(ship.brew_coffee(None), Some("☕"));
        assert_eq!(
            last_message(&ship),
            "Brewing a Strong coffee. Ahh, essential for deep space travel."
        );
        ship.brew_coffee(Some("Earl Grey, Hot"));
        assert_eq!(
            last_message(&ship),
            "Brewing a Earl Grey, Hot coffee. Ahh, essential for deep space travel."
        );
        assert_eq!(ship.coffee_machine().level, 90.0);
    }

    #[test]
    fn test_holodeck() {
        let mut ship = colossus();
        ship.stop_holodeck_program();
        assert_eq!(last_message(&ship), "Holodeck is not currently active.");
        ship.start_holodeck_program("Dixon Hill - Private Investigator");
        ship.start_holodeck_program("Captain Proton");
        assert_eq!(last_message(&ship), "Holodeck already in use.");
        assert_eq!(
            ship.holodeck().program(),
            Some("Dixon Hill - Private Investigator")
        );
        ship.stop_holodeck_program();
        assert_eq!(
            last_message(&ship),
            "Holodeck program 'Dixon Hill - Private Investigator' ended."
        );
    }

    #[test]
    fn test_self_destruct() {
        let mut ship = colossus();
        ship.initiate_self_destruct("1-1A");
        assert!(!ship.self_destruct().armed);
        assert_eq!(
            last_message(&ship),
            "Invalid self-destruct code. Sequence aborted."
        );
        ship.initiate_self_destruct("000-DESTRUCT-0");
        assert!(ship.self_destruct().armed);
        assert!(ship.observer().saw_event(&ShipEvent::SelfDestructArmed));
        ship.abort_self_destruct();
        assert!(!ship.self_destruct().armed);
        assert_eq!(last_message(&ship), "Self-destruct sequence aborted. Phew!");
        ship.abort_self_destruct();
        assert_eq!(last_message(&ship), "No self-destruct sequence active.");
    }

    #[test]
    fn test_status_report_is_read_only() {
        let mut ship = colossus();
        ship.add_crew_member("Data", "Operations Officer");
        let before = ship.ships_log().len();
        let report = ship.full_status_report();
        assert_eq!(ship.ships_log().len(), before);
        assert_eq!(report.crew, 1);
        assert_eq!(report.max_crew, 1015);
        assert_eq!(report, ship.full_status_report());
    }

    #[test]
    fn test_try_with_observer_rejects_bad_config() {
        let config = VesselConfig {
            name: String::new(),
            ..Default::default()
        };
        let result = Vessel::try_with_observer(config, RecordingObserver::new());
        assert!(matches!(result, Err(errors) if errors == vec![ConfigError::EmptyShipName]));
        assert!(Vessel::try_with_observer(VesselConfig::default(), RecordingObserver::new()).is_ok());
    }
}
