use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use greg::apps::{self, AppEntry};
use greg::menu::{Level, PickerSelector};
use greg::picker::DEFAULT_PROMPT;
use greg::{Launcher, MenuConfig, NavState, Navigator, Picker, PickerOptions, ShellLauncher};
use tracing::{debug, info};

use crate::cli::{CliArgs, Mode, write_selection};
use crate::settings::Settings;

const DEFAULT_TITLE: &str = "greg";
const DEFAULT_HELP: &str = " - type to filter, ↑↓ to move, enter to select";

/// Coordinates one invocation: gathers candidates for the chosen mode, runs
/// the picker and acts on the selection.
pub(crate) struct Workflow {
	mode: Mode,
	prompt: Option<String>,
	header: Option<String>,
	out: Option<PathBuf>,
	settings: Settings,
}

impl Workflow {
	pub(crate) fn new(cli: CliArgs, settings: Settings) -> Self {
		Self {
			mode: cli.mode,
			prompt: cli.prompt,
			header: cli.header,
			out: cli.out,
			settings,
		}
	}

	pub(crate) fn run(self) -> Result<()> {
		let max_visible = self.settings.max_items.resolve(self.settings.default_max);
		info!(mode = self.mode.as_str(), max_visible, "starting");
		let options = self.picker_options(max_visible);

		match self.mode {
			Mode::Dmenu => self.run_dmenu(options),
			Mode::Apps => self.run_apps(options),
			Mode::Menu => self.run_menu(options),
		}
	}

	fn picker_options(&self, max_visible: usize) -> PickerOptions {
		let (title, help) = header_text(self.header.as_deref());
		PickerOptions {
			prompt: self.prompt.clone().unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
			title: Some(title),
			help,
			max_visible,
			theme: self.settings.theme,
		}
	}

	fn run_dmenu(&self, options: PickerOptions) -> Result<()> {
		let stdin = io::stdin();
		if stdin.is_terminal() {
			bail!("expected piped input, e.g. `ls | greg -m dmenu`");
		}
		let items = read_candidates(stdin.lock())?;
		debug!(count = items.len(), "read candidates from stdin");

		let Some(selection) = Picker::new(items, options).run().context("picker session failed")? else {
			debug!("selection cancelled");
			return Ok(());
		};
		write_selection(&selection, self.out.as_deref())
	}

	fn run_apps(&self, options: PickerOptions) -> Result<()> {
		let entries = apps::discover(&self.settings.apps_dirs);
		if entries.is_empty() {
			bail!(
				"no applications found in {}",
				self.settings
					.apps_dirs
					.iter()
					.map(|dir| dir.display().to_string())
					.collect::<Vec<_>>()
					.join(", ")
			);
		}

		let labels = entries.iter().map(|entry| entry.name.clone()).collect();
		let Some(selection) = Picker::new(labels, options).run().context("picker session failed")? else {
			debug!("selection cancelled");
			return Ok(());
		};
		let entry = find_entry(&entries, &selection)
			.with_context(|| format!("no application named `{selection}`"))?;

		info!(name = %entry.name, path = %entry.path.display(), "launching application");
		ShellLauncher
			.execute_detached(&entry.exec)
			.with_context(|| format!("failed to launch {}", entry.name))
	}

	fn run_menu(&self, options: PickerOptions) -> Result<()> {
		let config = MenuConfig::load(&self.settings.menu_file)?;
		let (prompt, title) = root_text(self.prompt.as_deref(), self.header.as_deref(), &config);
		debug!(menu = %self.settings.menu_file.display(), entries = config.menu.len(), "loaded menu");

		let start = NavState::Browsing(Level::root(config, prompt, title));
		Navigator::new(PickerSelector::new(options), ShellLauncher).run(start)?;
		Ok(())
	}
}

/// Title and help text for the header line.
///
/// An explicit header replaces both.
fn header_text(header: Option<&str>) -> (String, Option<String>) {
	match header {
		Some(header) => (header.to_string(), None),
		None => (DEFAULT_TITLE.to_string(), Some(DEFAULT_HELP.to_string())),
	}
}

/// Prompt and title for the top menu level: command line first, then the menu
/// file, then the defaults.
fn root_text(prompt: Option<&str>, header: Option<&str>, config: &MenuConfig) -> (String, String) {
	let prompt = prompt
		.or_else(|| config.prompt())
		.unwrap_or(DEFAULT_PROMPT);
	let title = header.or_else(|| config.title()).unwrap_or(DEFAULT_TITLE);
	(prompt.to_string(), title.to_string())
}

/// Every line of `reader` is a candidate, in order.
fn read_candidates(reader: impl BufRead) -> Result<Vec<String>> {
	reader
		.lines()
		.collect::<io::Result<Vec<_>>>()
		.context("failed to read candidates from stdin")
}

fn find_entry<'a>(entries: &'a [AppEntry], name: &str) -> Option<&'a AppEntry> {
	entries.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	#[test]
	fn default_header_carries_key_help() {
		assert_eq!(
			header_text(None),
			("greg".to_string(), Some(DEFAULT_HELP.to_string()))
		);
		assert_eq!(header_text(Some("files")), ("files".to_string(), None));
	}

	#[test]
	fn menu_root_prefers_cli_then_file() {
		let config = MenuConfig::from_toml("prompt = \"menu>\"\ntitle = \"Main\"\n").unwrap();

		assert_eq!(
			root_text(None, None, &config),
			("menu>".to_string(), "Main".to_string())
		);
		assert_eq!(
			root_text(Some("go>"), Some("Top"), &config),
			("go>".to_string(), "Top".to_string())
		);
		assert_eq!(
			root_text(None, None, &MenuConfig::default()),
			(DEFAULT_PROMPT.to_string(), DEFAULT_TITLE.to_string())
		);
	}

	#[test]
	fn candidates_keep_order_and_blank_lines() {
		let items = read_candidates(Cursor::new("alpha\n\nbeta\r\ngamma")).unwrap();
		assert_eq!(items, ["alpha", "", "beta", "gamma"]);
	}

	#[test]
	fn entries_are_found_by_exact_name() {
		let entries = vec![
			AppEntry {
				name: "Files".into(),
				exec: "nautilus".into(),
				path: PathBuf::from("files.desktop"),
			},
			AppEntry {
				name: "Firefox".into(),
				exec: "firefox".into(),
				path: PathBuf::from("firefox.desktop"),
			},
		];
		assert_eq!(find_entry(&entries, "Firefox").map(|entry| entry.exec.as_str()), Some("firefox"));
		assert!(find_entry(&entries, "fire").is_none());
	}
}
