use application::RosterService;
use clap::{ArgAction, Parser};
use domain::RosterConfig;
use infrastructure::Overrides;
use shared::types::Result;
use std::path::PathBuf;
use tracing::info;

use crate::prompt::{Prompter, TerminalPrompter};
use crate::screen::RosterScreen;

#[derive(Parser, Debug)]
#[command(name = "crossfit_roster")]
#[command(about = "Class roster manager for the studio timetable")]
pub struct Cli {
    /// JSON file with slots, capacity and plan options
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum students per class
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Keep previous screens visible instead of clearing the terminal
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_clear_screen: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config_path: self.config.clone(),
            capacity: self.capacity,
        }
    }
}

pub struct CliApp<P: Prompter> {
    screen: RosterScreen<P>,
}

impl CliApp<TerminalPrompter> {
    pub fn new(config: &RosterConfig, cli: &Cli) -> Self {
        Self::with_prompter(config, TerminalPrompter::new(!cli.no_clear_screen))
    }
}

impl<P: Prompter> CliApp<P> {
    pub fn with_prompter(config: &RosterConfig, prompter: P) -> Self {
        Self {
            screen: RosterScreen::new(RosterService::new(config), prompter),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("roster screen started");
        self.screen.run()?;
        info!("roster screen closed");
        Ok(())
    }

    pub fn into_service(self) -> RosterService {
        self.screen.into_service()
    }
}
