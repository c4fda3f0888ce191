use crate::config::RosterConfig;
use crate::errors::RosterError;
use crate::models::{Slot, Student};

#[derive(Debug, Clone)]
struct SlotRoster {
    slot: Slot,
    students: Vec<Student>,
}

/// Owns every slot's student list and is the only thing that mutates them.
///
/// Slots are fixed at construction, in configuration order. Each list keeps
/// insertion order and never grows past `capacity`.
#[derive(Debug, Clone)]
pub struct RosterStore {
    rosters: Vec<SlotRoster>,
    capacity: usize,
}

impl RosterStore {
    /// Assumes `config` has already been validated.
    pub fn new(config: &RosterConfig) -> Self {
        Self::with_slots(config.slots.iter().cloned(), config.capacity)
    }

    pub fn with_slots(slots: impl IntoIterator<Item = Slot>, capacity: usize) -> Self {
        Self {
            rosters: slots
                .into_iter()
                .map(|slot| SlotRoster {
                    slot,
                    students: Vec::new(),
                })
                .collect(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.rosters.iter().map(|r| &r.slot)
    }

    pub fn contains(&self, slot_id: &str) -> bool {
        self.rosters.iter().any(|r| r.slot.id == slot_id)
    }

    fn roster(&self, slot_id: &str) -> Result<&SlotRoster, RosterError> {
        self.rosters
            .iter()
            .find(|r| r.slot.id == slot_id)
            .ok_or_else(|| RosterError::UnknownSlot(slot_id.to_string()))
    }

    fn roster_mut(&mut self, slot_id: &str) -> Result<&mut SlotRoster, RosterError> {
        self.rosters
            .iter_mut()
            .find(|r| r.slot.id == slot_id)
            .ok_or_else(|| RosterError::UnknownSlot(slot_id.to_string()))
    }

    /// Appends `student` to the slot. A full slot is left untouched.
    /// Duplicate names are allowed.
    pub fn add(&mut self, slot_id: &str, student: Student) -> Result<(), RosterError> {
        let capacity = self.capacity;
        let roster = self.roster_mut(slot_id)?;
        if roster.students.len() >= capacity {
            return Err(RosterError::CapacityExceeded {
                slot: slot_id.to_string(),
                capacity,
            });
        }
        roster.students.push(student);
        Ok(())
    }

    /// Removes every student called `name` and returns how many went.
    /// Zero matches is not an error.
    pub fn remove(&mut self, slot_id: &str, name: &str) -> Result<usize, RosterError> {
        let roster = self.roster_mut(slot_id)?;
        let before = roster.students.len();
        roster.students.retain(|s| s.name != name);
        Ok(before - roster.students.len())
    }

    /// Empties the slot immediately. Callers confirm with the user first.
    pub fn clear(&mut self, slot_id: &str) -> Result<usize, RosterError> {
        let roster = self.roster_mut(slot_id)?;
        let removed = roster.students.len();
        roster.students.clear();
        Ok(removed)
    }

    pub fn count(&self, slot_id: &str) -> Result<usize, RosterError> {
        Ok(self.roster(slot_id)?.students.len())
    }

    pub fn students(&self, slot_id: &str) -> Result<&[Student], RosterError> {
        Ok(&self.roster(slot_id)?.students)
    }

    pub fn remaining(&self, slot_id: &str) -> Result<usize, RosterError> {
        Ok(self.capacity.saturating_sub(self.count(slot_id)?))
    }

    pub fn is_full(&self, slot_id: &str) -> Result<bool, RosterError> {
        Ok(self.remaining(slot_id)? == 0)
    }
}
