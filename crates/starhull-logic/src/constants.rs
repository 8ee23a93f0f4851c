//! Fixed defaults and thresholds shared across vessel components.

/// Highest warp factor any hull in the fleet is rated for.
pub const MAX_WARP_FACTOR: f64 = 9.9;

/// Weapon power assigned to every installed weapon at construction (percent).
pub const FULL_WEAPON_POWER: f64 = 100.0;

/// Starting ammunition stock. Weapons not listed here are energy weapons.
pub const DEFAULT_AMMUNITION: &[(&str, u32)] = &[("Phasers", 1000), ("Photon Torpedoes", 50)];

pub mod environment {
    /// Oxygen level in percent.
    pub const OXYGEN_LEVEL: f64 = 98.0;
    /// Internal temperature in Celsius.
    pub const INTERNAL_TEMPERATURE: f64 = 22.0;
    /// Waste recycling efficiency in percent.
    pub const RECYCLING_EFFICIENCY: f64 = 85.0;
    pub const GRAVITY_PLATING_STATUS: &str = "Active";
}

pub mod navigation {
    pub const COMPUTER_STATUS: &str = "Online";
    pub const STAR_CHARTS_VERSION: &str = "v2.5. galactic-patch";
}

pub mod comms {
    pub const DEFAULT_CHANNEL: &str = "Open Hailing Frequencies";
}

pub mod coffee {
    /// Full coffee reservoir (percent).
    pub const FULL_LEVEL: f64 = 100.0;
    /// Reservoir drawn per cup (percent).
    pub const CUP_COST: f64 = 5.0;
    /// Brewing requires strictly more than this much left.
    pub const MIN_LEVEL_TO_BREW: f64 = 5.0;
    pub const DEFAULT_STRENGTH: &str = "Strong";
    /// Returned on a successful brew.
    pub const CUP: &str = "☕";
}

pub mod self_destruct {
    pub const DEFAULT_CODE: &str = "000-DESTRUCT-0";
    pub const INSURANCE_POLICY_NUMBER: &str = "GCS-1701-OMG";
}

/// Width of the `=` rule framing the status report.
pub const REPORT_RULE_WIDTH: usize = 50;
