use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Margin, Position};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::Picker;

const SELECTED_MARKER: &str = " > ";
const ITEM_INDENT: &str = "   ";
const NO_MATCHES: &str = "   no matches found";
const ELLIPSIS: char = '…';

impl Picker {
	/// Draw the header, prompt and item window into `frame`.
	pub fn draw(&self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 1,
			horizontal: 2,
		});
		frame.render_widget(Paragraph::new(self.lines(area.width)), area);

		let prompt_row = u16::from(self.options.title.is_some());
		if area.width > 0 && area.height > prompt_row {
			let offset = self.options.prompt.width() + 1 + self.state.input().width();
			let x = area
				.x
				.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
				.min(area.right() - 1);
			frame.set_cursor_position(Position::new(x, area.y + prompt_row));
		}
	}

	/// Lines making up one frame, with item labels cut to `width` columns.
	pub fn lines(&self, width: u16) -> Vec<Line<'_>> {
		let theme = &self.options.theme;
		let mut lines = Vec::with_capacity(self.state.max_visible() + 4);

		if let Some(title) = &self.options.title {
			let mut spans = vec![Span::styled(title.as_str(), theme.title_style())];
			if let Some(help) = &self.options.help {
				spans.push(Span::styled(help.as_str(), theme.help_style()));
			}
			lines.push(Line::from(spans));
		}

		lines.push(Line::from(vec![
			Span::styled(self.options.prompt.as_str(), theme.prompt_style()),
			Span::raw(" "),
			Span::raw(self.state.input()),
		]));
		lines.push(Line::default());

		let label_width = usize::from(width).saturating_sub(ITEM_INDENT.len());
		for (index, item) in self.state.visible() {
			let label = truncate(item, label_width);
			let line = if index == self.state.cursor() {
				Span::styled(format!("{SELECTED_MARKER}{label}"), theme.selected_style())
			} else {
				Span::styled(format!("{ITEM_INDENT}{label}"), theme.item_style())
			};
			lines.push(Line::from(line));
		}

		if self.state.filtered_len() == 0 {
			lines.push(Line::from(Span::styled(NO_MATCHES, theme.help_style())));
		} else if self.state.hidden_below() > 0 {
			let footer = format!("{ITEM_INDENT}...and {} more", self.state.hidden_below());
			lines.push(Line::from(Span::styled(footer, theme.help_style())));
		}

		lines
	}
}

/// Cut `text` to at most `max_width` display columns, marking the cut.
fn truncate(text: &str, max_width: usize) -> Cow<'_, str> {
	if text.width() <= max_width {
		return Cow::Borrowed(text);
	}
	if max_width == 0 {
		return Cow::Borrowed("");
	}

	let mut cut = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let width = ch.width().unwrap_or(0);
		if used + width + 1 > max_width {
			break;
		}
		cut.push(ch);
		used += width;
	}
	cut.push(ELLIPSIS);
	Cow::Owned(cut)
}
