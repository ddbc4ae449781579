use ratatui::style::{Color, Modifier, Style};

/// Foreground used for the highlighted row on top of the selection background.
const SELECTED_FG: Color = Color::Indexed(230);

pub const DEFAULT_TITLE: Color = Color::Indexed(71);
pub const DEFAULT_PROMPT: Color = Color::Indexed(79);
pub const DEFAULT_ITEM: Color = Color::Indexed(194);
pub const DEFAULT_SELECTED: Color = Color::Indexed(235);
pub const DEFAULT_HELP: Color = Color::Indexed(240);

/// Styles applied to each part of the picker frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub title: Style,
	pub prompt: Style,
	pub item: Style,
	pub selected: Style,
	pub help: Style,
}

impl Theme {
	/// Build a theme from the five configurable colours.
	#[must_use]
	pub fn from_colors(title: Color, prompt: Color, item: Color, selected: Color, help: Color) -> Self {
		Self {
			title: Style::new().fg(title).add_modifier(Modifier::BOLD),
			prompt: Style::new().fg(prompt),
			item: Style::new().fg(item),
			selected: Style::new()
				.fg(SELECTED_FG)
				.bg(selected)
				.add_modifier(Modifier::BOLD),
			help: Style::new().fg(help),
		}
	}

	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn item_style(&self) -> Style {
		self.item
	}

	#[must_use]
	pub fn selected_style(&self) -> Style {
		self.selected
	}

	#[must_use]
	pub fn help_style(&self) -> Style {
		self.help
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::from_colors(
			DEFAULT_TITLE,
			DEFAULT_PROMPT,
			DEFAULT_ITEM,
			DEFAULT_SELECTED,
			DEFAULT_HELP,
		)
	}
}
