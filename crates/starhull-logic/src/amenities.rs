//! Crew amenities (coffee, holodeck) and the self-destruct interlock.

use serde::{Deserialize, Serialize};

use crate::constants::{coffee, self_destruct};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeMachine {
    pub model: String,
    /// Reservoir level in percent.
    pub level: f64,
}

impl CoffeeMachine {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            level: coffee::FULL_LEVEL,
        }
    }

    /// Draw one cup. Needs strictly more than the minimum in the reservoir.
    pub fn brew(&mut self) -> bool {
        if self.level > coffee::MIN_LEVEL_TO_BREW {
            self.level -= coffee::CUP_COST;
            true
        } else {
            false
        }
    }

    /// Cups left before the machine refuses.
    pub fn cups_remaining(&self) -> u32 {
        if self.level <= coffee::MIN_LEVEL_TO_BREW {
            return 0;
        }
        ((self.level - coffee::MIN_LEVEL_TO_BREW) / coffee::CUP_COST).ceil() as u32
    }
}

/// One program at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Holodeck {
    program: Option<String>,
}

impl Holodeck {
    pub fn in_use(&self) -> bool {
        self.program.is_some()
    }

    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// Returns `false` if another program is already running.
    pub fn start(&mut self, program: &str) -> bool {
        if self.in_use() {
            return false;
        }
        self.program = Some(program.to_string());
        true
    }

    /// Returns the program that was running, if any.
    pub fn stop(&mut self) -> Option<String> {
        self.program.take()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfDestruct {
    pub armed: bool,
    code: String,
    pub insurance_policy_number: String,
}

impl Default for SelfDestruct {
    fn default() -> Self {
        Self {
            armed: false,
            code: self_destruct::DEFAULT_CODE.to_string(),
            insurance_policy_number: self_destruct::INSURANCE_POLICY_NUMBER.to_string(),
        }
    }
}

impl SelfDestruct {
    /// Arm on an exact code match. Returns whether the sequence is armed.
    pub fn initiate(&mut self, code: &str) -> bool {
        if code != self.code {
            return false;
        }
        self.armed = true;
        true
    }

    /// Returns `false` if nothing was armed.
    pub fn abort(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }
}
