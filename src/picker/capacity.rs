use ratatui::crossterm::terminal;
use tracing::debug;

/// Rows of the frame that never hold items: the outer margin, header, prompt,
/// the blank row under the prompt and the footer.
pub const RESERVED_ROWS: u16 = 6;

/// How many items the picker may show at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxItems {
	/// Fill the terminal height.
	Auto,
	Fixed(usize),
}

impl MaxItems {
	/// Interpret a configured count where zero or a negative value means auto.
	pub fn from_setting(value: i64) -> Self {
		usize::try_from(value)
			.ok()
			.filter(|count| *count > 0)
			.map_or(Self::Auto, Self::Fixed)
	}

	/// Compute the effective row count, probing the terminal when automatic.
	pub fn resolve(self, fallback: usize) -> usize {
		match self {
			Self::Fixed(count) => count,
			Self::Auto => {
				let rows = match terminal::size() {
					Ok((_, rows)) => Some(rows),
					Err(err) => {
						debug!(%err, fallback, "terminal size unavailable");
						None
					}
				};
				visible_rows(rows, fallback)
			}
		}
	}
}

/// Rows available for items in a terminal `rows` tall.
///
/// Falls back to `fallback` (at least one) when the height is unknown or too
/// small to show anything besides the frame chrome.
pub fn visible_rows(rows: Option<u16>, fallback: usize) -> usize {
	match rows {
		Some(rows) if rows > RESERVED_ROWS => usize::from(rows - RESERVED_ROWS),
		_ => fallback.max(1),
	}
}
