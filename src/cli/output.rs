use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Emit a confirmed selection on stdout, or into `out` followed by a newline.
pub(crate) fn write_selection(selection: &str, out: Option<&Path>) -> Result<()> {
	let Some(path) = out else {
		let mut stdout = io::stdout().lock();
		writeln!(stdout, "{selection}").context("failed to write selection to stdout")?;
		return Ok(());
	};

	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create directory {}", parent.display()))?;
	}
	fs::write(path, format!("{selection}\n"))
		.with_context(|| format!("failed to write selection to {}", path.display()))
}
