//! Starhull Headless Harness
//!
//! Commissions the demonstration dreadnought, flies the scripted voyage with
//! every log line mirrored to the console, prints the status report, then
//! validates vessel behaviour against a set of fresh ships.
//!
//! Usage:
//!   cargo run -p starhull-simtest
//!   cargo run -p starhull-simtest -- --verbose

use starhull_logic::config::{validate_config, VesselConfig};
use starhull_logic::observer::{NullObserver, RecordingObserver, ShipEvent, ShipObserver};
use starhull_logic::sensors::ScanRange;
use starhull_logic::vessel::Vessel;

// ── Demo ship (same JSON the integration docs use) ──────────────────────
const COLOSSUS_JSON: &str = include_str!("../../../data/colossus.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");

    let config: VesselConfig = match serde_json::from_str(COLOSSUS_JSON) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Demo ship config parse error: {}", e);
            std::process::exit(1);
        }
    };

    // ── Demonstration voyage ──
    let mut ship = match Vessel::try_new(config.clone()) {
        Ok(ship) => ship,
        Err(errors) => {
            for e in &errors {
                eprintln!("Invalid demo ship config: {}", e);
            }
            std::process::exit(1);
        }
    };
    fly_demo_voyage(&mut ship);
    ship.print_status_report();

    // ── Validation ──
    println!("=== Starhull Vessel Harness ===\n");
    let mut results = Vec::new();

    // 1. Demo config
    results.extend(validate_demo_config(&config));

    // 2. Hull & shields
    results.extend(validate_hull_and_shields(&config, verbose));

    // 3. Capacity laws
    results.extend(validate_capacity(&config));

    // 4. Propulsion
    results.extend(validate_propulsion(&config));

    // 5. Coffee threshold
    results.extend(validate_coffee(&config));

    // 6. Demo voyage replay
    results.extend(validate_demo_replay(&config, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

/// The scripted sequence of orders given to the demo ship.
fn fly_demo_voyage<O: ShipObserver>(ship: &mut Vessel<O>) {
    ship.add_crew_member("Jean-Luc Picard", "Captain");
    ship.add_crew_member("William Riker", "First Officer");
    ship.add_crew_member("Data", "Operations Officer");

    ship.load_cargo("Tribbles", 10_000, 0.1);
    ship.load_cargo("Dilithium Crystals", 50, 100.0);

    ship.toggle_shields(true);
    ship.start_engine();
    ship.set_course(100.0, 250.0, -50.0);
    ship.engage_warp(7.0);

    ship.lock_target("Hostile Bird-of-Prey");
    ship.fire_weapon("Phasers", "Hostile Bird-of-Prey");
    ship.fire_weapon("Photon Torpedoes", "Hostile Bird-of-Prey");

    ship.take_damage(3500.0);
    ship.recharge_shields(1000.0);

    ship.perform_scan(Some(ScanRange::Short));
    ship.send_hail(
        "This is Captain Picard. Surrender now!",
        "Hostile Bird-of-Prey",
    );

    ship.brew_coffee(Some("Earl Grey, Hot"));
    ship.start_holodeck_program("Dixon Hill - Private Investigator");
}

fn quiet_ship(config: &VesselConfig) -> Vessel<RecordingObserver> {
    Vessel::with_observer(config.clone(), RecordingObserver::new())
}

fn last_message(ship: &Vessel<RecordingObserver>) -> String {
    ship.ships_log()
        .last()
        .map(|e| e.message.clone())
        .unwrap_or_default()
}

// ── 1. Demo Config ──────────────────────────────────────────────────────

fn validate_demo_config(config: &VesselConfig) -> Vec<TestResult> {
    println!("--- Demo Config ---");
    let mut results = Vec::new();

    let errors = validate_config(config);
    results.push(TestResult {
        name: "config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            "demo ship config passes validation".into()
        } else {
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    results.push(TestResult {
        name: "config_matches_default".into(),
        passed: *config == VesselConfig::default(),
        detail: "bundled JSON matches VesselConfig::default()".into(),
    });

    results
}

// ── 2. Hull & Shields ───────────────────────────────────────────────────

fn validate_hull_and_shields(config: &VesselConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Hull & Shields ---");
    let mut results = Vec::new();

    // Full absorption by raised shields
    let mut ship = quiet_ship(config);
    ship.toggle_shields(true);
    ship.take_damage(3500.0);
    let h = ship.hull();
    results.push(TestResult {
        name: "shields_absorb_hit".into(),
        passed: h.current_shield == 6500.0 && h.current_hull == 5000.0 && h.shields_active,
        detail: format!(
            "shield={} hull={} active={}",
            h.current_shield, h.current_hull, h.shields_active
        ),
    });

    // Spill-over into hull
    let mut ship = quiet_ship(&VesselConfig {
        max_shield_points: 30.0,
        ..config.clone()
    });
    ship.toggle_shields(true);
    let report = ship.take_damage(50.0);
    results.push(TestResult {
        name: "shields_spill_over".into(),
        passed: report.hull_damage == 20.0
            && ship.hull().current_shield == 0.0
            && !ship.hull().shields_active,
        detail: format!(
            "absorbed={} hull_damage={}",
            report.shield_absorbed, report.hull_damage
        ),
    });

    // Bounds under a damage/repair sweep
    let mut ship = Vessel::with_observer(config.clone(), NullObserver);
    let mut violations = 0;
    for step in 0..200 {
        let amount = ((step * 37) % 1500) as f64 - 200.0;
        match step % 4 {
            0 => ship.toggle_shields(true),
            1 | 2 => {
                ship.take_damage(amount);
            }
            _ => {
                if step % 8 == 3 {
                    ship.repair_hull(amount);
                } else {
                    ship.recharge_shields(amount);
                }
            }
        }
        let h = ship.hull();
        let ok = (0.0..=h.max_hull).contains(&h.current_hull)
            && (0.0..=h.max_shield).contains(&h.current_shield)
            && (!h.shields_active || h.current_shield > 0.0);
        if !ok {
            violations += 1;
            if verbose {
                println!("  step {}: out of bounds {:?}", step, h);
            }
        }
    }
    results.push(TestResult {
        name: "hull_shield_bounds".into(),
        passed: violations == 0,
        detail: format!("{} bound violations over 200 operations", violations),
    });

    // Destruction
    let mut ship = quiet_ship(config);
    let report = ship.take_damage(6000.0);
    results.push(TestResult {
        name: "destruction_event".into(),
        passed: report.destroyed
            && ship.hull().current_hull == 0.0
            && ship.observer().saw_event(&ShipEvent::Destroyed),
        detail: last_message(&ship),
    });

    results
}

// ── 3. Capacity Laws ────────────────────────────────────────────────────

fn validate_capacity(config: &VesselConfig) -> Vec<TestResult> {
    println!("--- Capacity Laws ---");
    let mut results = Vec::new();

    let mut ship = quiet_ship(&VesselConfig {
        max_crew_capacity: 2,
        ..config.clone()
    });
    ship.add_crew_member("Jean-Luc Picard", "Captain");
    ship.add_crew_member("William Riker", "First Officer");
    let refused = !ship.add_crew_member("Data", "Operations Officer");
    results.push(TestResult {
        name: "crew_capacity".into(),
        passed: refused && ship.crew().len() == 2,
        detail: format!("{} aboard, third refused={}", ship.crew().len(), refused),
    });

    let mut ship = quiet_ship(config);
    ship.load_cargo("Dilithium Crystals", 450, 100.0);
    let before = ship.cargo().current_weight;
    let refused = !ship.load_cargo("Tribbles", 60_000, 0.1);
    results.push(TestResult {
        name: "cargo_capacity".into(),
        passed: refused
            && ship.cargo().current_weight == before
            && ship.cargo().free_capacity() == 5000.0,
        detail: format!(
            "weight={} of {} ({} free), overload refused={}",
            ship.cargo().current_weight,
            ship.cargo().capacity,
            ship.cargo().free_capacity(),
            refused
        ),
    });

    let jettisoned = ship.jettison_cargo("Dilithium Crystals", 450, 100.0);
    results.push(TestResult {
        name: "cargo_jettison".into(),
        passed: jettisoned
            && ship.cargo().items().is_empty()
            && ship.cargo().current_weight == 0.0,
        detail: format!("hold empty after jettison={}", ship.cargo().items().is_empty()),
    });

    results
}

// ── 4. Propulsion ───────────────────────────────────────────────────────

fn validate_propulsion(config: &VesselConfig) -> Vec<TestResult> {
    println!("--- Propulsion ---");
    let mut results = Vec::new();

    let mut ship = quiet_ship(config);
    ship.engage_warp(7.0);
    results.push(TestResult {
        name: "warp_needs_engines".into(),
        passed: ship.propulsion().warp_factor == 0.0,
        detail: last_message(&ship),
    });

    ship.start_engine();
    ship.engage_warp(12.0);
    results.push(TestResult {
        name: "warp_max".into(),
        passed: ship.propulsion().warp_factor == 0.0,
        detail: last_message(&ship),
    });

    ship.engage_warp(7.0);
    results.push(TestResult {
        name: "warp_engaged".into(),
        passed: ship.propulsion().is_at_warp() && ship.propulsion().speed == 0.0,
        detail: last_message(&ship),
    });

    ship.stop_engine();
    let once = (
        ship.propulsion().engine_active,
        ship.propulsion().speed,
        ship.propulsion().warp_factor,
    );
    ship.stop_engine();
    let twice = (
        ship.propulsion().engine_active,
        ship.propulsion().speed,
        ship.propulsion().warp_factor,
    );
    results.push(TestResult {
        name: "stop_engine_idempotent".into(),
        passed: once == twice && twice == (false, 0.0, 0.0),
        detail: format!("{:?}", twice),
    });

    results.push(TestResult {
        name: "no_fuel_drain".into(),
        passed: ship.propulsion().fuel_level == ship.propulsion().fuel_capacity,
        detail: format!("fuel={:.2}", ship.propulsion().fuel_level),
    });

    results
}

// ── 5. Coffee Threshold ─────────────────────────────────────────────────

fn validate_coffee(config: &VesselConfig) -> Vec<TestResult> {
    println!("--- Coffee ---");
    let mut results = Vec::new();

    let mut ship = quiet_ship(config);
    let expected = ship.coffee_machine().cups_remaining() as usize;
    let cups = (0..20).filter(|_| ship.brew_coffee(None).is_some()).count();
    results.push(TestResult {
        name: "coffee_strict_threshold".into(),
        passed: cups == 19
            && cups == expected
            && ship.coffee_machine().level == 5.0
            && ship.coffee_machine().cups_remaining() == 0,
        detail: format!(
            "{} cups brewed of {} predicted, level={}%",
            cups,
            expected,
            ship.coffee_machine().level
        ),
    });

    results
}

// ── 6. Demo Voyage Replay ───────────────────────────────────────────────

fn validate_demo_replay(config: &VesselConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Demo Voyage Replay ---");
    let mut results = Vec::new();

    let mut ship = quiet_ship(config);
    fly_demo_voyage(&mut ship);
    let report = ship.full_status_report();

    results.push(TestResult {
        name: "replay_final_state".into(),
        passed: report.crew == 3
            && report.cargo_weight == 6000.0
            && report.shield == 7500.0
            && report.warp_factor == 7.0
            && report.coffee_level == 95.0
            && report.holodeck_in_use,
        detail: format!(
            "crew={} cargo={} shield={} warp={} coffee={}",
            report.crew, report.cargo_weight, report.shield, report.warp_factor, report.coffee_level
        ),
    });

    let mirrored = ship.observer().messages() == ship.ships_log().messages().collect::<Vec<_>>();
    results.push(TestResult {
        name: "replay_observer_mirrors_log".into(),
        passed: mirrored,
        detail: format!("{} log entries", ship.ships_log().len()),
    });

    let text = report.to_string();
    results.push(TestResult {
        name: "replay_report_layout".into(),
        passed: text.lines().count() == 22
            && text.contains("Weapons: Phasers, Photon Torpedoes, Disruptor Cannons\n"),
        detail: format!("{} report lines", text.lines().count()),
    });

    if verbose {
        println!("  Ship's log:");
        for line in ship.ships_log().lines() {
            println!("    {}", line);
        }
    }

    results
}
