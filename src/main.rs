mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use tracing::debug;
use workflow::Workflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let settings = settings::load(&cli)?;

	if cli.print_config {
		settings.print_summary();
	}

	if let Some(path) = greg::logging::initialize(settings.log)? {
		debug!(path = %path.display(), "logging enabled");
	}

	Workflow::new(cli, settings).run()
}
