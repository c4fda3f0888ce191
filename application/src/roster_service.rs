use domain::{CommitError, Draft, Plan, RosterConfig, RosterError, RosterStore, Slot, Student};
use tracing::info;

use crate::input_session::{InputSession, SessionState};

/// Everything the roster screen needs, behind one handle. The screen owns an
/// instance of this and forwards each user intent to one method.
#[derive(Debug, Clone)]
pub struct RosterService {
    store: RosterStore,
    session: InputSession,
    plan_options: Vec<Plan>,
}

/// Read-only view of one slot for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSummary<'a> {
    pub slot: &'a Slot,
    pub count: usize,
    pub capacity: usize,
    pub students: &'a [Student],
}

impl SlotSummary<'_> {
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity
    }
}

impl RosterService {
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            store: RosterStore::new(config),
            session: InputSession::new(config.max_name_len),
            plan_options: config.plan_options.clone(),
        }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn plan_options(&self) -> &[Plan] {
        &self.plan_options
    }

    pub fn summaries(&self) -> Vec<SlotSummary<'_>> {
        self.store
            .slots()
            .map(|slot| {
                let students = self.store.students(&slot.id).unwrap_or_default();
                SlotSummary {
                    slot,
                    count: students.len(),
                    capacity: self.store.capacity(),
                    students,
                }
            })
            .collect()
    }

    pub fn summary(&self, slot_id: &str) -> Result<SlotSummary<'_>, RosterError> {
        let slot = self
            .store
            .slots()
            .find(|s| s.id == slot_id)
            .ok_or_else(|| RosterError::UnknownSlot(slot_id.to_string()))?;
        let students = self.store.students(slot_id)?;
        Ok(SlotSummary {
            slot,
            count: students.len(),
            capacity: self.store.capacity(),
            students,
        })
    }

    pub fn count(&self, slot_id: &str) -> Result<usize, RosterError> {
        self.store.count(slot_id)
    }

    pub fn remove(&mut self, slot_id: &str, name: &str) -> Result<usize, RosterError> {
        let removed = self.store.remove(slot_id, name)?;
        info!(slot = %slot_id, name = %name, removed, "students removed");
        Ok(removed)
    }

    /// Clears without asking. The screen is responsible for confirming.
    pub fn clear(&mut self, slot_id: &str) -> Result<usize, RosterError> {
        let removed = self.store.clear(slot_id)?;
        info!(slot = %slot_id, removed, "slot cleared");
        Ok(removed)
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.session.draft()
    }

    pub fn open_draft(&mut self, slot_id: &str) -> Result<&Draft, RosterError> {
        self.session.open(&self.store, slot_id)
    }

    pub fn set_draft_name(&mut self, text: &str) -> Result<(), CommitError> {
        self.session.set_name(text)
    }

    pub fn set_draft_plan(&mut self, plan: Plan) -> Result<(), CommitError> {
        self.session.set_plan(plan)
    }

    pub fn commit_draft(&mut self) -> Result<Student, CommitError> {
        let slot = self.session.draft().map(|d| d.target_slot.clone());
        let student = self.session.commit(&mut self.store)?;
        info!(slot = ?slot, name = %student.name, plan = %student.plan, "student added");
        Ok(student)
    }

    pub fn cancel_draft(&mut self) {
        self.session.cancel();
    }
}
