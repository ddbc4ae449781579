use std::io;

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use super::terminal::TerminalSession;
use super::{Picker, Transition};

/// Blocking supplier of terminal input events.
pub trait EventSource {
	fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
	fn next_event(&mut self) -> io::Result<Event> {
		event::read()
	}
}

impl Picker {
	/// Take over the terminal and run the session to completion.
	///
	/// Returns the confirmed item, or `None` when the user cancelled or
	/// confirmed while nothing matched.
	pub fn run(mut self) -> io::Result<Option<String>> {
		let mut session = TerminalSession::enter()?;
		let result = self.run_with(session.terminal(), &mut TerminalEvents);
		session.leave()?;
		result
	}

	/// Pump `events` into the picker, redrawing after each one, until the
	/// user confirms or cancels.
	pub fn run_with<B, E>(&mut self, terminal: &mut Terminal<B>, events: &mut E) -> io::Result<Option<String>>
	where
		B: Backend,
		E: EventSource + ?Sized,
	{
		debug!(items = self.state.items().len(), max_visible = self.state.max_visible(), "picker session started");
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			let transition = match events.next_event()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
				_ => Transition::Continue,
			};

			match transition {
				Transition::Continue => {}
				Transition::Confirm => {
					let selection = self.state.selection().map(str::to_owned);
					debug!(?selection, query = self.state.input(), "picker confirmed");
					return Ok(selection);
				}
				Transition::Cancel => {
					debug!(query = self.state.input(), "picker cancelled");
					return Ok(None);
				}
			}
		}
	}
}
