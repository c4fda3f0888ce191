use domain::{CommitError, Draft, Plan, RosterError, RosterStore, Student};
use shared::text::{clamp_chars, is_blank};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Editing,
}

/// Add-student workflow. Holds at most one draft and validates it before
/// handing it to the [`RosterStore`].
#[derive(Debug, Clone)]
pub struct InputSession {
    draft: Option<Draft>,
    max_name_len: usize,
}

impl InputSession {
    pub fn new(max_name_len: usize) -> Self {
        Self {
            draft: None,
            max_name_len,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.draft {
            Some(_) => SessionState::Editing,
            None => SessionState::Closed,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Starts a fresh draft for `slot_id`. Any draft already open is dropped
    /// without warning.
    pub fn open(&mut self, store: &RosterStore, slot_id: &str) -> Result<&Draft, RosterError> {
        if !store.contains(slot_id) {
            return Err(RosterError::UnknownSlot(slot_id.to_string()));
        }
        if let Some(previous) = self.draft.take() {
            debug!(slot = %previous.target_slot, "discarding unsaved draft");
        }
        debug!(slot = %slot_id, "draft opened");
        Ok(&*self.draft.insert(Draft::new(slot_id)))
    }

    /// Replaces the typed name, cut to the configured maximum length.
    pub fn set_name(&mut self, text: &str) -> Result<(), CommitError> {
        let max = self.max_name_len;
        let draft = self.draft.as_mut().ok_or(CommitError::NoDraft)?;
        draft.name = clamp_chars(text, max);
        Ok(())
    }

    pub fn set_plan(&mut self, plan: Plan) -> Result<(), CommitError> {
        let draft = self.draft.as_mut().ok_or(CommitError::NoDraft)?;
        draft.plan = Some(plan);
        Ok(())
    }

    /// Validates the draft and enrolls it. Checks run in a fixed order:
    /// blank name, then missing plan, then slot capacity. On any error the
    /// draft stays open exactly as it was.
    pub fn commit(&mut self, store: &mut RosterStore) -> Result<Student, CommitError> {
        let draft = self.draft.as_ref().ok_or(CommitError::NoDraft)?;
        let result = Self::validate(draft).and_then(|student| {
            store.add(&draft.target_slot, student.clone())?;
            Ok(student)
        });

        match result {
            Ok(student) => {
                debug!(slot = %draft.target_slot, "draft committed");
                self.draft = None;
                Ok(student)
            }
            Err(err) => {
                warn!(slot = %draft.target_slot, error = %err, "draft rejected");
                Err(err)
            }
        }
    }

    fn validate(draft: &Draft) -> Result<Student, CommitError> {
        if is_blank(&draft.name) {
            return Err(CommitError::EmptyName);
        }
        draft.to_student().ok_or(CommitError::NoPlanSelected)
    }

    pub fn cancel(&mut self) {
        if let Some(draft) = self.draft.take() {
            debug!(slot = %draft.target_slot, "draft cancelled");
        }
    }
}
