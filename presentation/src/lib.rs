pub mod cli;
pub mod prompt;
pub mod render;
pub mod screen;

pub use cli::{Cli, CliApp};
pub use prompt::{Prompter, TerminalPrompter};
pub use screen::RosterScreen;
