//! File-backed structured logging.
//!
//! The picker owns the terminal, so log output never goes to stdout or
//! stderr. When enabled, events are appended to `greg.log` in the data
//! directory and filtered through `GREG_LOG` (`EnvFilter` syntax).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

pub const LOG_FILE: &str = "greg.log";
const FILTER_ENV: &str = "GREG_LOG";
const DEFAULT_FILTER: &str = "greg=debug";

/// Install the global subscriber when `enabled`, returning the log path.
pub fn initialize(enabled: bool) -> Result<Option<PathBuf>> {
	if !enabled {
		return Ok(None);
	}

	let dir = app_dirs::get_data_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let filter =
		EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install logger: {err}"))?;

	Ok(Some(path))
}
