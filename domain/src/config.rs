use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::ConfigError;
use crate::models::{Plan, Slot};

pub const DEFAULT_CAPACITY: usize = 17;
pub const DEFAULT_MAX_NAME_LEN: usize = 30;
pub const DEFAULT_SLOT_HOURS: [u8; 6] = [6, 7, 8, 18, 19, 20];

/// Startup configuration of the roster screen. Missing JSON fields take the
/// studio defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub slots: Vec<Slot>,
    pub capacity: usize,
    pub plan_options: Vec<Plan>,
    pub max_name_len: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOT_HOURS.into_iter().map(Slot::at_hour).collect(),
            capacity: DEFAULT_CAPACITY,
            plan_options: Plan::ALL.to_vec(),
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots.is_empty() {
            return Err(ConfigError::NoSlots);
        }
        let mut seen = HashSet::new();
        for slot in &self.slots {
            if slot.id.trim().is_empty() {
                return Err(ConfigError::BlankSlotId);
            }
            if !seen.insert(slot.id.as_str()) {
                return Err(ConfigError::DuplicateSlot(slot.id.clone()));
            }
        }
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.plan_options.is_empty() {
            return Err(ConfigError::NoPlanOptions);
        }
        let mut plans = HashSet::new();
        for plan in &self.plan_options {
            if !plans.insert(*plan) {
                return Err(ConfigError::DuplicatePlan(plan.to_string()));
            }
        }
        if self.max_name_len == 0 {
            return Err(ConfigError::ZeroNameLength);
        }
        Ok(())
    }

    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }
}
