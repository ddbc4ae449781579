use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Expand a leading `~` and make `value` absolute against the current directory.
pub(super) fn resolve_path(value: &str) -> Result<PathBuf> {
	let expanded = expand_home(value);
	std::path::absolute(&expanded)
		.with_context(|| format!("failed to resolve path {}", expanded.display()))
}

fn expand_home(value: &str) -> PathBuf {
	let home = env::var_os("HOME").filter(|home| !home.is_empty());
	match (value, home) {
		("~", Some(home)) => PathBuf::from(home),
		(_, Some(home)) if value.starts_with("~/") => Path::new(&home).join(&value[2..]),
		_ => PathBuf::from(value),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn absolute_paths_are_kept() {
		assert_eq!(resolve_path("/etc/greg.toml").unwrap(), PathBuf::from("/etc/greg.toml"));
	}

	#[test]
	fn relative_paths_join_the_current_directory() {
		let cwd = env::current_dir().unwrap();
		assert_eq!(resolve_path("extra.toml").unwrap(), cwd.join("extra.toml"));
	}

	#[test]
	fn tilde_expands_to_home() {
		let Some(home) = env::var_os("HOME").filter(|home| !home.is_empty()) else {
			return;
		};
		assert_eq!(expand_home("~/menu.toml"), Path::new(&home).join("menu.toml"));
		assert_eq!(expand_home("~"), PathBuf::from(&home));
		assert_eq!(expand_home("~user/x"), PathBuf::from("~user/x"));
	}
}
