use std::path::PathBuf;

use greg::picker::{MaxItems, Theme};

mod errors;
mod sources;
mod summary;

pub(crate) use errors::ConfigError;
pub(crate) use sources::SettingSource;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct Settings {
	pub(crate) max_items: MaxItems,
	/// Where an explicit `max_items` came from, if any layer set it.
	pub(crate) max_items_source: Option<SettingSource>,
	/// Row count used when the terminal height cannot be used.
	pub(crate) default_max: usize,
	pub(crate) log: bool,
	pub(crate) theme: Theme,
	pub(crate) apps_dirs: Vec<PathBuf>,
	pub(crate) menu_file: PathBuf,
}

impl Settings {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
