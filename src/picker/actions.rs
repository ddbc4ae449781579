use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Intent decoded from a single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
	Cancel,
	Confirm,
	MoveUp,
	MoveDown,
	Erase,
	Insert(char),
	Ignore,
}

impl PickerAction {
	/// Map a key press onto the action it triggers.
	///
	/// Plain `k` and `j` move the cursor like the arrow keys; every other
	/// plain character extends the filter.
	pub fn from_key(key: KeyEvent) -> Self {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);

		match key.code {
			KeyCode::Esc => Self::Cancel,
			KeyCode::Char('c') if ctrl => Self::Cancel,
			KeyCode::Enter => Self::Confirm,
			KeyCode::Up => Self::MoveUp,
			KeyCode::Char('p') if ctrl => Self::MoveUp,
			KeyCode::Char('k') if !ctrl && !alt => Self::MoveUp,
			KeyCode::Down => Self::MoveDown,
			KeyCode::Char('n') if ctrl => Self::MoveDown,
			KeyCode::Char('j') if !ctrl && !alt => Self::MoveDown,
			KeyCode::Backspace => Self::Erase,
			KeyCode::Char(ch) if !ctrl && !alt => Self::Insert(ch),
			_ => Self::Ignore,
		}
	}
}
