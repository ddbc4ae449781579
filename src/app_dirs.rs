//! Where `greg` keeps its files.
//!
//! `GREG_CONFIG_DIR` and `GREG_DATA_DIR` take precedence over the platform
//! locations from `directories`; blank values count as unset.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "GREG_CONFIG_DIR";
const DATA_DIR_ENV: &str = "GREG_DATA_DIR";

/// Menu file read in menu mode when none is configured.
pub const MENU_FILE: &str = "menu.toml";

#[derive(Clone, Copy)]
enum Kind {
	Config,
	Data,
}

fn locate(kind: Kind) -> Result<PathBuf> {
	let var = match kind {
		Kind::Config => CONFIG_DIR_ENV,
		Kind::Data => DATA_DIR_ENV,
	};
	if let Some(dir) = env::var_os(var).filter(|value| !value.is_empty()) {
		return Ok(PathBuf::from(dir));
	}

	let dirs = ProjectDirs::from("", "", "greg")
		.ok_or_else(|| anyhow!("no home directory to place greg's files in"))?;
	Ok(match kind {
		Kind::Config => dirs.config_dir().to_path_buf(),
		Kind::Data => dirs.data_local_dir().to_path_buf(),
	})
}

/// Directory holding `config.toml` and the default menu file.
pub fn get_config_dir() -> Result<PathBuf> {
	locate(Kind::Config)
}

/// Directory the log file is written to.
pub fn get_data_dir() -> Result<PathBuf> {
	locate(Kind::Data)
}

pub fn default_menu_file() -> Result<PathBuf> {
	Ok(get_config_dir()?.join(MENU_FILE))
}
