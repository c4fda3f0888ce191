use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Membership plan a student is enrolled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    WellHub,
    TotalPass,
    Simples,
    Vip,
}

impl Plan {
    pub const ALL: [Plan; 4] = [Plan::WellHub, Plan::TotalPass, Plan::Simples, Plan::Vip];

    pub fn label(&self) -> &'static str {
        match self {
            Plan::WellHub => "WellHub",
            Plan::TotalPass => "TotalPass",
            Plan::Simples => "Simples",
            Plan::Vip => "Vip",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Plan {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plan::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPlan(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub plan: Plan,
}

impl Student {
    pub fn new(name: impl Into<String>, plan: Plan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.plan)
    }
}

/// A class time. `id` is the roster key, `label` is what staff see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub label: String,
}

impl Slot {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Slot for a whole hour, e.g. `Slot::at_hour(6)` is `6H` shown as `06:00`.
    pub fn at_hour(hour: u8) -> Self {
        Self::new(format!("{}H", hour), format!("{:02}:00", hour))
    }
}
