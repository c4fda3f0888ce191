use clap::Parser;
use infrastructure::Config;
use presentation::cli::{Cli, CliApp};
use shared::telemetry::init_tracing;
use shared::types::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.overrides())?;
    init_tracing(config.log_filter.as_deref());

    let mut app = CliApp::new(&config.roster, &cli);
    app.run()
}
