use serde::Deserialize;

use super::{override_text, override_value};

/// `[colors]`: ratatui colour strings for each part of the frame.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct ColorsSection {
	pub(in crate::settings) title: Option<String>,
	pub(in crate::settings) prompt: Option<String>,
	pub(in crate::settings) item: Option<String>,
	pub(in crate::settings) selected: Option<String>,
	pub(in crate::settings) help: Option<String>,
}

impl ColorsSection {
	pub(super) fn merge(&mut self, other: ColorsSection) {
		override_text(&mut self.title, other.title);
		override_text(&mut self.prompt, other.prompt);
		override_text(&mut self.item, other.item);
		override_text(&mut self.selected, other.selected);
		override_text(&mut self.help, other.help);
	}
}

/// `[apps]`: where desktop entries are looked up.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct AppsSection {
	pub(in crate::settings) dirs: Option<Vec<String>>,
}

impl AppsSection {
	pub(super) fn merge(&mut self, other: AppsSection) {
		let dirs = other.dirs.map(|dirs| {
			dirs.into_iter()
				.map(|dir| dir.trim().to_string())
				.filter(|dir| !dir.is_empty())
				.collect::<Vec<_>>()
		});
		override_value(&mut self.dirs, dirs.filter(|dirs| !dirs.is_empty()));
	}
}
