//! Filter, cursor and scroll window bookkeeping for a single picker session.
//!
//! [`PickerState`] is a pure state machine: it never touches the terminal and
//! every transition is driven through [`PickerState::apply`]. Rendering and
//! the event loop live in sibling modules and only read from it.

use super::actions::PickerAction;

/// Result of applying one action to a [`PickerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
	/// Keep the session running.
	Continue,
	/// The user accepted the item under the cursor.
	Confirm,
	/// The user abandoned the session without a selection.
	Cancel,
}

/// Mutable state of an interactive selection over a fixed candidate list.
#[derive(Debug, Clone)]
pub struct PickerState {
	items: Vec<String>,
	lowered: Vec<String>,
	filtered: Vec<usize>,
	input: String,
	cursor: usize,
	window_start: usize,
	max_visible: usize,
}

impl PickerState {
	/// Start a session over `items` showing at most `max_visible` rows.
	///
	/// A capacity of zero is raised to one so the cursor always has a row.
	pub fn new(items: Vec<String>, max_visible: usize) -> Self {
		let lowered = items.iter().map(|item| item.to_lowercase()).collect();
		let filtered = (0..items.len()).collect();
		Self {
			items,
			lowered,
			filtered,
			input: String::new(),
			cursor: 0,
			window_start: 0,
			max_visible: max_visible.max(1),
		}
	}

	/// Apply a single action and report whether the session should end.
	pub fn apply(&mut self, action: PickerAction) -> Transition {
		match action {
			PickerAction::Cancel => return Transition::Cancel,
			PickerAction::Confirm => return Transition::Confirm,
			PickerAction::MoveUp => self.move_up(),
			PickerAction::MoveDown => self.move_down(),
			PickerAction::Erase => self.erase(),
			PickerAction::Insert(ch) => self.insert(ch),
			PickerAction::Ignore => {}
		}
		Transition::Continue
	}

	/// Text typed so far.
	pub fn input(&self) -> &str {
		&self.input
	}

	/// Index of the cursor within the filtered list.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Index of the first filtered item shown on screen.
	pub fn window_start(&self) -> usize {
		self.window_start
	}

	pub fn max_visible(&self) -> usize {
		self.max_visible
	}

	/// Every candidate the session was started with, in display order.
	pub fn items(&self) -> &[String] {
		&self.items
	}

	pub fn filtered_len(&self) -> usize {
		self.filtered.len()
	}

	/// Candidates matching the current input, in their original order.
	pub fn filtered(&self) -> impl Iterator<Item = &str> + '_ {
		self.filtered.iter().map(|&index| self.items[index].as_str())
	}

	/// Items inside the scroll window paired with their filtered index.
	pub fn visible(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
		let end = self.window_end();
		self.filtered[self.window_start..end]
			.iter()
			.enumerate()
			.map(move |(offset, &index)| (self.window_start + offset, self.items[index].as_str()))
	}

	/// Number of filtered items below the scroll window.
	pub fn hidden_below(&self) -> usize {
		self.filtered.len().saturating_sub(self.window_end())
	}

	/// Item under the cursor, or `None` when nothing matches.
	pub fn selection(&self) -> Option<&str> {
		self.filtered
			.get(self.cursor)
			.map(|&index| self.items[index].as_str())
	}

	fn window_end(&self) -> usize {
		(self.window_start + self.max_visible).min(self.filtered.len())
	}

	fn move_up(&mut self) {
		if self.cursor > 0 {
			self.cursor -= 1;
			if self.cursor < self.window_start {
				self.window_start = self.cursor;
			}
		}
	}

	fn move_down(&mut self) {
		if self.cursor + 1 < self.filtered.len() {
			self.cursor += 1;
			if self.cursor >= self.window_start + self.max_visible {
				self.window_start = self.cursor + 1 - self.max_visible;
			}
		}
	}

	fn erase(&mut self) {
		if self.input.pop().is_some() {
			self.refilter();
		}
	}

	fn insert(&mut self, ch: char) {
		self.input.push(ch);
		self.refilter();
	}

	fn refilter(&mut self) {
		let needle = self.input.to_lowercase();
		self.filtered = self
			.lowered
			.iter()
			.enumerate()
			.filter(|(_, item)| item.contains(needle.as_str()))
			.map(|(index, _)| index)
			.collect();

		self.window_start = 0;
		self.cursor = match self.filtered.len() {
			0 => 0,
			len => self.cursor.min(len - 1),
		};
		if self.cursor >= self.max_visible {
			self.window_start = self.cursor + 1 - self.max_visible;
		}
	}
}

/// Return the ordered subsequence of `items` containing `query`, ignoring case.
pub fn filter_items<'a, S: AsRef<str>>(items: &'a [S], query: &str) -> Vec<&'a str> {
	let needle = query.to_lowercase();
	items
		.iter()
		.map(AsRef::as_ref)
		.filter(|item| item.to_lowercase().contains(needle.as_str()))
		.collect()
}
