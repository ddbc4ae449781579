//! Interactive single-item picker.
//!
//! A [`Picker`] owns a [`PickerState`] plus the text and styles needed to draw
//! it. [`Picker::run`] takes over the terminal until the user confirms or
//! cancels, while [`Picker::run_with`] drives the same loop against any
//! ratatui backend and [`EventSource`], which is how the tests exercise it.

mod actions;
mod capacity;
mod render;
mod runtime;
mod state;
mod terminal;
pub mod theme;

use ratatui::crossterm::event::KeyEvent;

pub use actions::PickerAction;
pub use capacity::{MaxItems, RESERVED_ROWS, visible_rows};
pub use runtime::{EventSource, TerminalEvents};
pub use state::{PickerState, Transition, filter_items};
pub use theme::Theme;

/// Prompt shown when none is configured.
pub const DEFAULT_PROMPT: &str = "search>";

/// Presentation settings for one picker session.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
	pub prompt: String,
	pub title: Option<String>,
	pub help: Option<String>,
	pub max_visible: usize,
	pub theme: Theme,
}

impl Default for PickerOptions {
	fn default() -> Self {
		Self {
			prompt: DEFAULT_PROMPT.to_string(),
			title: None,
			help: None,
			max_visible: 10,
			theme: Theme::default(),
		}
	}
}

/// A candidate list bound to its presentation settings.
#[derive(Debug, Clone)]
pub struct Picker {
	state: PickerState,
	options: PickerOptions,
}

impl Picker {
	pub fn new(items: Vec<String>, options: PickerOptions) -> Self {
		let state = PickerState::new(items, options.max_visible);
		Self { state, options }
	}

	/// Feed one key press through the state machine.
	pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
		self.state.apply(PickerAction::from_key(key))
	}
}
