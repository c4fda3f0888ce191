pub mod input_session;
pub mod roster_service;

pub use input_session::{InputSession, SessionState};
pub use roster_service::{RosterService, SlotSummary};
