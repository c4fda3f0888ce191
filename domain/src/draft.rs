use serde::{Deserialize, Serialize};

use crate::models::{Plan, Student};

/// A student being typed in but not yet enrolled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub target_slot: String,
    pub name: String,
    pub plan: Option<Plan>,
}

impl Draft {
    pub fn new(target_slot: impl Into<String>) -> Self {
        Self {
            target_slot: target_slot.into(),
            name: String::new(),
            plan: None,
        }
    }

    /// The student this draft would become. The name is stored as typed.
    pub fn to_student(&self) -> Option<Student> {
        self.plan.map(|plan| Student::new(self.name.clone(), plan))
    }
}
