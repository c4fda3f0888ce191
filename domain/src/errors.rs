use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("slot {slot} is full ({capacity} students maximum)")]
    CapacityExceeded { slot: String, capacity: usize },

    #[error("unknown slot: {0}")]
    UnknownSlot(String),
}

/// Reasons a draft could not be committed. The draft stays open on all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error("please type the student's name")]
    EmptyName,

    #[error("please select the student's plan")]
    NoPlanSelected,

    #[error("no student is being added")]
    NoDraft,

    #[error(transparent)]
    Roster(#[from] RosterError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one slot must be configured")]
    NoSlots,

    #[error("slot id must not be blank")]
    BlankSlotId,

    #[error("duplicate slot id: {0}")]
    DuplicateSlot(String),

    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    #[error("at least one plan option must be configured")]
    NoPlanOptions,

    #[error("plan option listed twice: {0}")]
    DuplicatePlan(String),

    #[error("unknown plan: {0}")]
    UnknownPlan(String),

    #[error("maximum name length must be greater than zero")]
    ZeroNameLength,
}
