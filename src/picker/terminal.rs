use std::io::{self, Stderr};

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Raw-mode alternate screen drawn on stderr, keeping stdout free for output.
///
/// The terminal is restored by [`TerminalSession::leave`] or, failing that,
/// when the session is dropped.
pub(super) struct TerminalSession {
	terminal: Terminal<CrosstermBackend<Stderr>>,
	active: bool,
}

impl TerminalSession {
	pub(super) fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		if let Err(err) = execute!(io::stderr(), EnterAlternateScreen) {
			let _ = disable_raw_mode();
			return Err(err);
		}

		let terminal = match Terminal::new(CrosstermBackend::new(io::stderr())) {
			Ok(terminal) => terminal,
			Err(err) => {
				let _ = execute!(io::stderr(), LeaveAlternateScreen);
				let _ = disable_raw_mode();
				return Err(err);
			}
		};
		let mut session = Self {
			terminal,
			active: true,
		};
		session.terminal.clear()?;
		Ok(session)
	}

	pub(super) fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stderr>> {
		&mut self.terminal
	}

	pub(super) fn leave(mut self) -> io::Result<()> {
		self.restore()
	}

	fn restore(&mut self) -> io::Result<()> {
		if !self.active {
			return Ok(());
		}
		self.active = false;
		disable_raw_mode()?;
		execute!(io::stderr(), LeaveAlternateScreen)?;
		self.terminal.show_cursor()
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		let _ = self.restore();
	}
}
