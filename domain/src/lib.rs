pub mod config;
pub mod draft;
pub mod errors;
pub mod models;
pub mod roster;

pub use config::RosterConfig;
pub use draft::Draft;
pub use errors::{CommitError, ConfigError, RosterError};
pub use models::{Plan, Slot, Student};
pub use roster::RosterStore;
