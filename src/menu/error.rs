use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::launcher::LaunchError;

#[derive(Debug, Error)]
pub enum MenuError {
	#[error("menu file not found: {}", path.display())]
	NotFound { path: PathBuf },
	#[error("failed to read menu file {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("error parsing menu file {}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
	#[error("selection `{0}` does not match any menu item")]
	UnmatchedSelection(String),
	#[error("no action for item `{0}`")]
	NoAction(String),
	#[error("could not expand `{label}`")]
	Generator {
		label: String,
		#[source]
		source: LaunchError,
	},
	#[error("command for `{label}` failed")]
	Command {
		label: String,
		#[source]
		source: LaunchError,
	},
	#[error("selection session failed")]
	Session(#[from] io::Error),
}
