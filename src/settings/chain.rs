use anyhow::Result;
use tracing::debug;

use super::raw::RawConfig;
use super::sources::load_file;
use super::util::resolve_path;

/// Maximum number of `file` redirections followed.
pub(super) const CHAIN_LIMIT: usize = 5;

/// Merge the files named by successive `file` keys on top of `raw`.
///
/// Each chained file is required. Following stops when no further file is
/// named or after [`CHAIN_LIMIT`] hops. Returns the number of files merged.
pub(super) fn follow_chain(raw: &mut RawConfig) -> Result<usize> {
	let mut hops = 0;
	while hops < CHAIN_LIMIT {
		let Some(next) = raw.file.take() else {
			break;
		};
		let path = resolve_path(&next)?;
		debug!(path = %path.display(), "loading chained configuration");
		raw.merge(load_file(&path, true)?);
		hops += 1;
	}
	if hops == CHAIN_LIMIT && raw.file.is_some() {
		debug!(limit = CHAIN_LIMIT, "configuration chain limit reached");
	}
	Ok(hops)
}
