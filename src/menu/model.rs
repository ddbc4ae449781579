use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use super::MenuError;

/// One entry of a menu tree.
///
/// An entry either leads to more entries (`items`, or the output of its
/// `generator`) or runs `exec` when picked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuNode {
	pub label: String,
	pub exec: Option<String>,
	pub generator: Option<String>,
	pub prompt: Option<String>,
	pub title: Option<String>,
	/// Run `exec` attached to the terminal instead of detached.
	pub visible: bool,
	pub items: Vec<MenuNode>,
}

impl Default for MenuNode {
	fn default() -> Self {
		Self {
			label: String::new(),
			exec: None,
			generator: None,
			prompt: None,
			title: None,
			visible: true,
			items: Vec::new(),
		}
	}
}

/// What picking a node leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeAction<'a> {
	/// Browse the node's static children.
	Descend,
	/// Run the generator and browse its output.
	Generate(&'a str),
	/// Run the command and finish.
	Execute { command: &'a str, visible: bool },
	/// Nothing is configured for this node.
	Missing,
}

impl MenuNode {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_exec(mut self, command: impl Into<String>) -> Self {
		self.exec = Some(command.into());
		self
	}

	#[must_use]
	pub fn with_generator(mut self, command: impl Into<String>) -> Self {
		self.generator = Some(command.into());
		self
	}

	#[must_use]
	pub fn with_items(mut self, items: Vec<MenuNode>) -> Self {
		self.items = items;
		self
	}

	#[must_use]
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = Some(prompt.into());
		self
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn detached(mut self) -> Self {
		self.visible = false;
		self
	}

	pub fn command(&self) -> Option<&str> {
		non_empty(self.exec.as_deref())
	}

	pub fn generator_command(&self) -> Option<&str> {
		non_empty(self.generator.as_deref())
	}

	/// Decide what selecting this node does.
	///
	/// Static children win over a generator, and a generator wins over a
	/// direct command.
	pub fn action(&self) -> NodeAction<'_> {
		if !self.items.is_empty() {
			return NodeAction::Descend;
		}
		if let Some(generator) = self.generator_command() {
			return NodeAction::Generate(generator);
		}
		match self.command() {
			Some(command) => NodeAction::Execute {
				command,
				visible: self.visible,
			},
			None => NodeAction::Missing,
		}
	}
}

/// Root of a menu file: the top-level entries plus default prompt and title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
	pub menu: Vec<MenuNode>,
	pub prompt: Option<String>,
	pub title: Option<String>,
}

impl MenuConfig {
	pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(text)
	}

	/// Read and parse a menu file.
	pub fn load(path: &Path) -> Result<Self, MenuError> {
		let text = fs::read_to_string(path).map_err(|source| match source.kind() {
			io::ErrorKind::NotFound => MenuError::NotFound {
				path: path.to_path_buf(),
			},
			_ => MenuError::Read {
				path: path.to_path_buf(),
				source,
			},
		})?;
		Self::from_toml(&text).map_err(|source| MenuError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn prompt(&self) -> Option<&str> {
		non_empty(self.prompt.as_deref())
	}

	pub fn title(&self) -> Option<&str> {
		non_empty(self.title.as_deref())
	}
}

/// Document printed by generator commands.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeneratedItems {
	items: Vec<MenuNode>,
}

/// Parse generator output: a TOML document listing nodes under `items`.
pub fn parse_generated(text: &str) -> Result<Vec<MenuNode>, toml::de::Error> {
	toml::from_str::<GeneratedItems>(text).map(|generated| generated.items)
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	const SAMPLE: &str = r#"
prompt = "go>"
title = "Launcher"

[[menu]]
label = "Apps"
title = "Applications"

[[menu.items]]
label = "Editor"
exec = "edit"

[[menu.items]]
label = "Player"
exec = "player --daemon"
visible = false

[[menu]]
label = "Windows"
generator = "list-windows"

[[menu]]
label = "Broken"
"#;

	#[test]
	fn parses_nested_menu_file() {
		let config = MenuConfig::from_toml(SAMPLE).expect("parse");
		assert_eq!(config.prompt(), Some("go>"));
		assert_eq!(config.title(), Some("Launcher"));
		assert_eq!(config.menu.len(), 3);

		let apps = &config.menu[0];
		assert_eq!(apps.title.as_deref(), Some("Applications"));
		assert_eq!(apps.items.len(), 2);
		assert!(apps.items[0].visible);
		assert!(!apps.items[1].visible);
	}

	#[test]
	fn actions_follow_configured_fields() {
		let config = MenuConfig::from_toml(SAMPLE).expect("parse");
		assert_eq!(config.menu[0].action(), NodeAction::Descend);
		assert_eq!(
			config.menu[0].items[1].action(),
			NodeAction::Execute {
				command: "player --daemon",
				visible: false
			}
		);
		assert_eq!(config.menu[1].action(), NodeAction::Generate("list-windows"));
		assert_eq!(config.menu[2].action(), NodeAction::Missing);
	}

	#[test]
	fn blank_fields_count_as_unset() {
		let node = MenuNode::new("blank").with_exec("  ").with_generator("");
		assert_eq!(node.action(), NodeAction::Missing);

		let node = MenuNode::new("both").with_exec("run").with_generator("gen");
		assert_eq!(node.action(), NodeAction::Generate("gen"));

		let node = MenuNode::new("nested")
			.with_generator("gen")
			.with_items(vec![MenuNode::new("child")]);
		assert_eq!(node.action(), NodeAction::Descend);
	}

	#[test]
	fn generated_items_use_items_key() {
		let items = parse_generated(
			r#"
[[items]]
label = "one"
exec = "echo one"
"#,
		)
		.expect("parse");
		assert_eq!(items, vec![MenuNode::new("one").with_exec("echo one")]);
		assert!(parse_generated("").expect("empty document").is_empty());
		assert!(parse_generated("items = 3").is_err());
	}

	#[test]
	fn load_reports_missing_and_malformed_files() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("menu.toml");
		let err = MenuConfig::load(&missing).unwrap_err();
		assert!(matches!(err, MenuError::NotFound { .. }));
		assert!(err.to_string().contains("menu.toml"));

		fs::write(&missing, "[[menu]\nlabel =").unwrap();
		let err = MenuConfig::load(&missing).unwrap_err();
		assert!(matches!(err, MenuError::Parse { .. }));

		fs::write(&missing, SAMPLE).unwrap();
		assert_eq!(MenuConfig::load(&missing).unwrap().menu.len(), 3);
	}
}
