use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use greg::picker::{MaxItems, Theme, theme};
use greg::{app_dirs, apps};
use ratatui::style::Color;
use serde::Deserialize;

use super::resolved::{ConfigError, SettingSource, Settings};
use super::util::resolve_path;
use crate::cli::CliArgs;

mod sections;

use sections::{AppsSection, ColorsSection};

const DEFAULT_MAX: i64 = 10;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) max_items: Option<i64>,
	pub(super) default_max: Option<i64>,
	pub(super) log: Option<bool>,
	pub(super) file: Option<String>,
	pub(super) menu: Option<String>,
	pub(super) colors: ColorsSection,
	pub(super) apps: AppsSection,
}

/// Replace `slot` when `value` is set.
fn override_value<T>(slot: &mut Option<T>, value: Option<T>) {
	if value.is_some() {
		*slot = value;
	}
}

/// Replace `slot` when `value` holds non-blank text.
fn override_text(slot: &mut Option<String>, value: Option<String>) {
	override_value(slot, value.filter(|text| !text.trim().is_empty()));
}

impl RawConfig {
	/// Lay `other` on top of `self`, field by field.
	pub(super) fn merge(&mut self, other: RawConfig) {
		override_value(&mut self.max_items, other.max_items);
		override_value(&mut self.default_max, other.default_max);
		override_value(&mut self.log, other.log);
		override_text(&mut self.file, other.file);
		override_text(&mut self.menu, other.menu);
		self.colors.merge(other.colors);
		self.apps.merge(other.apps);
	}

	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		override_value(&mut self.max_items, cli.max_items);
		if cli.log {
			self.log = Some(true);
		}
		override_text(
			&mut self.menu,
			cli.menu.as_ref().map(|path| path.display().to_string()),
		);
	}

	/// Convert the raw configuration into [`Settings`], validating and filling
	/// defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<Settings> {
		let default_max = self.default_max.unwrap_or(DEFAULT_MAX);
		let default_max = usize::try_from(default_max)
			.ok()
			.filter(|count| *count > 0)
			.ok_or_else(|| {
				ConfigError::invalid(
					"default_max",
					default_max.to_string(),
					SettingSource::detect("default_max", None),
					"must be at least 1",
				)
			})?;

		let colors = self.colors;
		let theme = Theme::from_colors(
			parse_color(colors.title, theme::DEFAULT_TITLE, "colors.title")?,
			parse_color(colors.prompt, theme::DEFAULT_PROMPT, "colors.prompt")?,
			parse_color(colors.item, theme::DEFAULT_ITEM, "colors.item")?,
			parse_color(colors.selected, theme::DEFAULT_SELECTED, "colors.selected")?,
			parse_color(colors.help, theme::DEFAULT_HELP, "colors.help")?,
		);

		let apps_dirs = match self.apps.dirs {
			Some(dirs) => dirs
				.iter()
				.map(|dir| resolve_path(dir))
				.collect::<Result<Vec<PathBuf>>>()?,
			None => apps::default_dirs(),
		};

		let menu_file = match self.menu {
			Some(menu) => resolve_path(&menu)?,
			None => app_dirs::default_menu_file().context("failed to locate the default menu file")?,
		};

		Ok(Settings {
			max_items: MaxItems::from_setting(self.max_items.unwrap_or(-1)),
			max_items_source: self.max_items.map(|_| {
				SettingSource::detect("max_items", cli.max_items.map(|_| "--max-items"))
			}),
			default_max,
			log: self.log.unwrap_or(false),
			theme,
			apps_dirs,
			menu_file,
		})
	}
}

fn parse_color(value: Option<String>, fallback: Color, key: &'static str) -> Result<Color, ConfigError> {
	let Some(value) = value else {
		return Ok(fallback);
	};
	Color::from_str(value.trim()).map_err(|err| {
		ConfigError::invalid(key, value.clone(), SettingSource::detect(key, None), err.to_string())
	})
}
