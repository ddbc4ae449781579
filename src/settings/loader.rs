use anyhow::Result;
use tracing::debug;

use super::chain::follow_chain;
use super::raw::RawConfig;
use super::resolved::Settings;
use super::sources::{environment_layer, file_layers};
use crate::cli::CliArgs;

/// Load configuration by combining config files, environment variables and
/// CLI arguments, lowest precedence first.
pub(crate) fn load(cli: &CliArgs) -> Result<Settings> {
	let mut raw = RawConfig::default();
	for layer in file_layers(cli)? {
		raw.merge(layer);
	}
	let hops = follow_chain(&mut raw)?;
	if hops > 0 {
		debug!(hops, "followed chained configuration files");
	}
	raw.merge(environment_layer()?);
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
