use tracing::{debug, info, warn};

use super::model::non_empty;
use super::{MenuConfig, MenuError, MenuNode, NodeAction, SelectionRequest, Selector};
use crate::launcher::Launcher;

/// Entries of one menu level together with the text shown above them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
	pub nodes: Vec<MenuNode>,
	pub prompt: String,
	pub title: String,
	/// Label of the entry this level was opened from.
	pub parent: Option<String>,
}

impl Level {
	/// Level listing the top of `config`.
	pub fn root(config: MenuConfig, prompt: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			nodes: config.menu,
			prompt: prompt.into(),
			title: title.into(),
			parent: None,
		}
	}

	/// Level listing the children of `node`, inheriting `prompt` when the node
	/// sets none and falling back to its label as the title.
	fn child_of(node: MenuNode, prompt: &str) -> Self {
		let prompt = non_empty(node.prompt.as_deref()).unwrap_or(prompt).to_owned();
		let title = non_empty(node.title.as_deref())
			.unwrap_or(&node.label)
			.to_owned();
		Self {
			nodes: node.items,
			prompt,
			title,
			parent: Some(node.label),
		}
	}

	fn labels(&self) -> Vec<String> {
		self.nodes.iter().map(|node| node.label.clone()).collect()
	}
}

/// States of a menu traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
	Browsing(Level),
	/// Run the node's generator and browse what it prints.
	Generating { node: MenuNode, prompt: String },
	/// Run a leaf command, then stop.
	Executing {
		label: String,
		command: String,
		visible: bool,
	},
	Exiting,
}

/// Walks a menu tree, one selection session per level.
///
/// Each level is owned by the state that displays it, so expanding a
/// generator only ever fills in the copy of the node that was picked. There is
/// no way back up: cancelling at any depth ends the traversal.
pub struct Navigator<S, L> {
	selector: S,
	launcher: L,
}

impl<S: Selector, L: Launcher> Navigator<S, L> {
	pub fn new(selector: S, launcher: L) -> Self {
		Self { selector, launcher }
	}

	/// Drive the traversal from `start` until it exits or fails.
	pub fn run(&mut self, start: NavState) -> Result<(), MenuError> {
		let mut state = start;
		while state != NavState::Exiting {
			state = self.step(state)?;
		}
		debug!("menu traversal finished");
		Ok(())
	}

	/// Perform a single transition.
	pub fn step(&mut self, state: NavState) -> Result<NavState, MenuError> {
		match state {
			NavState::Browsing(level) => self.browse(level),
			NavState::Generating { node, prompt } => self.generate(node, &prompt),
			NavState::Executing {
				label,
				command,
				visible,
			} => self.execute(label, &command, visible),
			NavState::Exiting => Ok(NavState::Exiting),
		}
	}

	fn browse(&mut self, level: Level) -> Result<NavState, MenuError> {
		debug!(
			title = %level.title,
			parent = ?level.parent,
			entries = level.nodes.len(),
			"browsing menu level"
		);
		let picked = self.selector.select(SelectionRequest {
			labels: level.labels(),
			prompt: &level.prompt,
			title: &level.title,
		})?;

		let Some(label) = picked.filter(|label| !label.is_empty()) else {
			info!("menu closed without a selection");
			return Ok(NavState::Exiting);
		};

		let Level { nodes, prompt, .. } = level;
		let Some(node) = nodes.into_iter().find(|node| node.label == label) else {
			return Err(MenuError::UnmatchedSelection(label));
		};

		let next = match node.action() {
			NodeAction::Descend => NavState::Browsing(Level::child_of(node, &prompt)),
			NodeAction::Generate(_) => NavState::Generating { node, prompt },
			NodeAction::Execute { command, visible } => NavState::Executing {
				command: command.to_owned(),
				visible,
				label: node.label,
			},
			NodeAction::Missing => return Err(MenuError::NoAction(node.label)),
		};
		Ok(next)
	}

	fn generate(&mut self, mut node: MenuNode, prompt: &str) -> Result<NavState, MenuError> {
		let Some(command) = node.generator_command().map(str::to_owned) else {
			return Err(MenuError::NoAction(node.label));
		};

		info!(label = %node.label, %command, "expanding generated menu");
		node.items = self
			.launcher
			.run_generator(&command)
			.map_err(|source| MenuError::Generator {
				label: node.label.clone(),
				source,
			})?;
		if node.items.is_empty() {
			warn!(label = %node.label, "generator produced no entries");
		}

		Ok(NavState::Browsing(Level::child_of(node, prompt)))
	}

	fn execute(&mut self, label: String, command: &str, visible: bool) -> Result<NavState, MenuError> {
		info!(%label, command, visible, "executing menu entry");
		self.launcher
			.execute(command, visible)
			.map_err(|source| MenuError::Command { label, source })?;
		Ok(NavState::Exiting)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::VecDeque;
	use std::io;

	use super::*;
	use crate::launcher::{LaunchError, ShellLauncher};

	/// Answers selection requests from a script and records what it was shown.
	#[derive(Default)]
	struct ScriptedSelector {
		answers: VecDeque<Option<String>>,
		seen: Vec<(Vec<String>, String, String)>,
	}

	impl ScriptedSelector {
		fn answering(answers: &[Option<&str>]) -> Self {
			Self {
				answers: answers.iter().map(|answer| answer.map(str::to_owned)).collect(),
				seen: Vec::new(),
			}
		}
	}

	impl Selector for ScriptedSelector {
		fn select(&mut self, request: SelectionRequest<'_>) -> io::Result<Option<String>> {
			self.seen.push((
				request.labels,
				request.prompt.to_owned(),
				request.title.to_owned(),
			));
			Ok(self.answers.pop_front().flatten())
		}
	}

	#[derive(Default)]
	struct RecordingLauncher {
		executed: Vec<(String, bool)>,
		generated: Vec<String>,
		generator_output: Vec<MenuNode>,
		fail_commands: bool,
	}

	impl Launcher for RecordingLauncher {
		fn execute_foreground(&mut self, command: &str) -> Result<(), LaunchError> {
			self.executed.push((command.to_owned(), true));
			if self.fail_commands {
				return Err(LaunchError::Spawn {
					command: command.to_owned(),
					source: io::Error::new(io::ErrorKind::NotFound, "missing"),
				});
			}
			Ok(())
		}

		fn execute_detached(&mut self, command: &str) -> Result<(), LaunchError> {
			self.executed.push((command.to_owned(), false));
			Ok(())
		}

		fn run_generator(&mut self, command: &str) -> Result<Vec<MenuNode>, LaunchError> {
			self.generated.push(command.to_owned());
			Ok(self.generator_output.clone())
		}
	}

	fn config(menu: Vec<MenuNode>) -> MenuConfig {
		MenuConfig {
			menu,
			..MenuConfig::default()
		}
	}

	fn start(menu: Vec<MenuNode>) -> NavState {
		NavState::Browsing(Level::root(config(menu), "search>", "greg"))
	}

	fn apps_menu() -> Vec<MenuNode> {
		vec![
			MenuNode::new("Apps").with_items(vec![MenuNode::new("Editor").with_exec("edit")]),
			MenuNode::new("Quit").with_exec("true").detached(),
		]
	}

	#[test]
	fn descends_then_runs_command_in_foreground() {
		let mut selector = ScriptedSelector::answering(&[Some("Apps"), Some("Editor")]);
		let mut launcher = RecordingLauncher::default();

		Navigator::new(&mut selector, &mut launcher)
			.run(start(apps_menu()))
			.expect("navigation");

		assert_eq!(launcher.executed, [("edit".to_owned(), true)]);
		assert_eq!(selector.seen.len(), 2);
		assert_eq!(selector.seen[0].0, ["Apps", "Quit"]);
		assert_eq!(selector.seen[1].0, ["Editor"]);
		assert_eq!(selector.seen[1].1, "search>");
		assert_eq!(selector.seen[1].2, "Apps");
	}

	#[test]
	fn detached_entries_use_detached_execution() {
		let mut selector = ScriptedSelector::answering(&[Some("Quit")]);
		let mut launcher = RecordingLauncher::default();
		Navigator::new(&mut selector, &mut launcher)
			.run(start(apps_menu()))
			.expect("navigation");
		assert_eq!(launcher.executed, [("true".to_owned(), false)]);
	}

	#[test]
	fn cancelling_at_any_depth_exits_quietly() {
		for answers in [vec![None], vec![Some("Apps"), None]] {
			let mut selector = ScriptedSelector::answering(&answers);
			let mut launcher = RecordingLauncher::default();
			Navigator::new(&mut selector, &mut launcher)
				.run(start(apps_menu()))
				.expect("cancel is not an error");
			assert!(launcher.executed.is_empty());
			assert_eq!(selector.seen.len(), answers.len());
		}
	}

	#[test]
	fn empty_pick_counts_as_no_selection() {
		let mut selector = ScriptedSelector::answering(&[Some("")]);
		let mut launcher = RecordingLauncher::default();
		let mut navigator = Navigator::new(&mut selector, &mut launcher);
		assert_eq!(navigator.step(start(apps_menu())).unwrap(), NavState::Exiting);
	}

	#[test]
	fn submenu_prompt_and_title_overrides() {
		let menu = vec![
			MenuNode::new("Tools")
				.with_prompt("tool>")
				.with_title("Toolbox")
				.with_items(vec![MenuNode::new("Hammer").with_exec("hammer")]),
		];
		let mut selector = ScriptedSelector::answering(&[Some("Tools"), None]);
		let mut launcher = RecordingLauncher::default();
		Navigator::new(&mut selector, &mut launcher)
			.run(start(menu))
			.expect("navigation");
		assert_eq!(selector.seen[1].1, "tool>");
		assert_eq!(selector.seen[1].2, "Toolbox");
	}

	#[test]
	fn generator_output_becomes_the_next_level() {
		let menu = vec![
			MenuNode::new("Windows")
				.with_title("Open windows")
				.with_generator("list-windows"),
		];
		let mut selector = ScriptedSelector::answering(&[Some("Windows"), Some("term")]);
		let mut launcher = RecordingLauncher {
			generator_output: vec![MenuNode::new("term").with_exec("focus term")],
			..RecordingLauncher::default()
		};

		Navigator::new(&mut selector, &mut launcher)
			.run(start(menu))
			.expect("navigation");

		assert_eq!(launcher.generated, ["list-windows"]);
		assert_eq!(selector.seen[1].0, ["term"]);
		assert_eq!(selector.seen[1].2, "Open windows");
		assert_eq!(launcher.executed, [("focus term".to_owned(), true)]);
	}

	#[test]
	fn generator_runs_through_the_shell() {
		let menu = vec![MenuNode::new("Dynamic").with_generator(
			r#"printf '[[items]]\nlabel = "only"\nexec = "true"\n'"#,
		)];
		let mut selector = ScriptedSelector::answering(&[Some("Dynamic")]);
		let mut navigator = Navigator::new(&mut selector, ShellLauncher);

		let generating = navigator.step(start(menu)).expect("browse");
		assert!(matches!(generating, NavState::Generating { .. }));

		let NavState::Browsing(level) = navigator.step(generating).expect("generate") else {
			panic!("expected a generated level");
		};
		assert_eq!(level.labels(), ["only"]);
		assert_eq!(level.title, "Dynamic");
		assert_eq!(level.parent.as_deref(), Some("Dynamic"));
	}

	#[test]
	fn failing_generator_is_fatal() {
		let menu = vec![MenuNode::new("Broken").with_generator("exit 1")];
		let mut selector = ScriptedSelector::answering(&[Some("Broken")]);
		let err = Navigator::new(&mut selector, ShellLauncher)
			.run(start(menu))
			.unwrap_err();
		assert!(matches!(err, MenuError::Generator { ref label, .. } if label == "Broken"));
	}

	#[test]
	fn unknown_selection_is_an_error() {
		let mut selector = ScriptedSelector::answering(&[Some("Nope")]);
		let mut launcher = RecordingLauncher::default();
		let err = Navigator::new(&mut selector, &mut launcher)
			.run(start(apps_menu()))
			.unwrap_err();
		assert!(matches!(err, MenuError::UnmatchedSelection(ref label) if label == "Nope"));
	}

	#[test]
	fn node_without_action_is_an_error() {
		let menu = vec![MenuNode::new("Empty")];
		let mut selector = ScriptedSelector::answering(&[Some("Empty")]);
		let mut launcher = RecordingLauncher::default();
		let err = Navigator::new(&mut selector, &mut launcher)
			.run(start(menu))
			.unwrap_err();
		assert_eq!(err.to_string(), "no action for item `Empty`");
	}

	#[test]
	fn failed_command_is_reported_after_running() {
		let mut selector = ScriptedSelector::answering(&[Some("Apps"), Some("Editor")]);
		let mut launcher = RecordingLauncher {
			fail_commands: true,
			..RecordingLauncher::default()
		};
		let err = Navigator::new(&mut selector, &mut launcher)
			.run(start(apps_menu()))
			.unwrap_err();
		assert!(matches!(err, MenuError::Command { ref label, .. } if label == "Editor"));
		assert_eq!(launcher.executed.len(), 1);
	}

	#[test]
	fn duplicate_labels_resolve_to_the_first_entry() {
		let menu = vec![
			MenuNode::new("Same").with_exec("first"),
			MenuNode::new("Same").with_exec("second"),
		];
		let mut selector = ScriptedSelector::answering(&[Some("Same")]);
		let mut launcher = RecordingLauncher::default();
		Navigator::new(&mut selector, &mut launcher)
			.run(start(menu))
			.expect("navigation");
		assert_eq!(launcher.executed, [("first".to_owned(), true)]);
	}
}
