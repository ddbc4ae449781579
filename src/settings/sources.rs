use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use greg::app_dirs;

use super::raw::RawConfig;
use crate::cli::CliArgs;

pub(super) const CONFIG_FILE: &str = "config.toml";
pub(super) const ENV_PREFIX: &str = "greg";

/// Read one TOML configuration file into a raw layer.
pub(super) fn load_file(path: &Path, required: bool) -> Result<RawConfig> {
	Config::builder()
		.add_source(
			File::from(path.to_path_buf())
				.format(FileFormat::Toml)
				.required(required),
		)
		.build()
		.and_then(Config::try_deserialize::<RawConfig>)
		.with_context(|| format!("failed to load configuration from {}", path.display()))
}

/// Layers from the default location (unless disabled) and every `--config`
/// file, in increasing precedence.
pub(super) fn file_layers(cli: &CliArgs) -> Result<Vec<RawConfig>> {
	let mut layers = Vec::new();

	if !cli.no_config {
		for path in default_config_files() {
			layers.push(load_file(&path, false)?);
		}
	}

	for path in &cli.config {
		layers.push(load_file(path, true)?);
	}

	Ok(layers)
}

/// Values supplied as `GREG__<KEY>` environment variables.
pub(super) fn environment_layer() -> Result<RawConfig> {
	Config::builder()
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true)
				.list_separator(",")
				.with_list_parse_key("apps.dirs"),
		)
		.build()
		.and_then(Config::try_deserialize::<RawConfig>)
		.context("failed to read configuration from the environment")
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	app_dirs::get_config_dir()
		.map(|dir| vec![dir.join(CONFIG_FILE)])
		.unwrap_or_default()
}
