//! Running shell command lines on behalf of menu entries and applications.
//!
//! Every command line goes through `/bin/sh -c`, so pipes, redirection and
//! other shell syntax are available to configured commands.

use std::io::{self, Read};
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, info};

use crate::menu::{MenuNode, parse_generated};

pub const SHELL: &str = "/bin/sh";

#[derive(Debug, Error)]
pub enum LaunchError {
	#[error("failed to start `{command}`")]
	Spawn {
		command: String,
		#[source]
		source: io::Error,
	},
	#[error("`{command}` exited with {status}")]
	Exited { command: String, status: ExitStatus },
	#[error("failed to collect output of `{command}`")]
	Capture {
		command: String,
		#[source]
		source: io::Error,
	},
	#[error("generator `{command}` failed with {status}\n{output}")]
	Generator {
		command: String,
		status: ExitStatus,
		output: String,
	},
	#[error("failed to decode output of generator `{command}`\n{output}")]
	Decode {
		command: String,
		output: String,
		#[source]
		source: toml::de::Error,
	},
}

/// Executes command lines for the menu navigator and the application mode.
pub trait Launcher {
	/// Run attached to the terminal and wait for the command to exit.
	fn execute_foreground(&mut self, command: &str) -> Result<(), LaunchError>;

	/// Start in a new session with no standard streams and return at once.
	fn execute_detached(&mut self, command: &str) -> Result<(), LaunchError>;

	/// Run to completion and parse its combined output into menu nodes.
	fn run_generator(&mut self, command: &str) -> Result<Vec<MenuNode>, LaunchError>;

	fn execute(&mut self, command: &str, visible: bool) -> Result<(), LaunchError> {
		if visible {
			self.execute_foreground(command)
		} else {
			self.execute_detached(command)
		}
	}
}

impl<T: Launcher + ?Sized> Launcher for &mut T {
	fn execute_foreground(&mut self, command: &str) -> Result<(), LaunchError> {
		(**self).execute_foreground(command)
	}

	fn execute_detached(&mut self, command: &str) -> Result<(), LaunchError> {
		(**self).execute_detached(command)
	}

	fn run_generator(&mut self, command: &str) -> Result<Vec<MenuNode>, LaunchError> {
		(**self).run_generator(command)
	}
}

/// [`Launcher`] backed by `/bin/sh`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl Launcher for ShellLauncher {
	fn execute_foreground(&mut self, command: &str) -> Result<(), LaunchError> {
		info!(command, "running in foreground");
		let status = shell(command)
			.stdin(Stdio::inherit())
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.status()
			.map_err(|source| spawn_error(command, source))?;

		if status.success() {
			Ok(())
		} else {
			Err(LaunchError::Exited {
				command: command.to_owned(),
				status,
			})
		}
	}

	fn execute_detached(&mut self, command: &str) -> Result<(), LaunchError> {
		let mut process = shell(command);
		process
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null());
		// SAFETY: setsid is async-signal-safe and only affects the child.
		unsafe {
			process.pre_exec(|| {
				if libc::setsid() == -1 {
					return Err(io::Error::last_os_error());
				}
				Ok(())
			});
		}

		let child = process
			.spawn()
			.map_err(|source| spawn_error(command, source))?;
		info!(command, pid = child.id(), "started detached");
		Ok(())
	}

	fn run_generator(&mut self, command: &str) -> Result<Vec<MenuNode>, LaunchError> {
		let (status, output) = capture_combined(command)?;
		debug!(command, %status, bytes = output.len(), "generator finished");

		if !status.success() {
			return Err(LaunchError::Generator {
				command: command.to_owned(),
				status,
				output,
			});
		}

		parse_generated(&output).map_err(|source| LaunchError::Decode {
			command: command.to_owned(),
			output,
			source,
		})
	}
}

fn shell(command: &str) -> Command {
	let mut process = Command::new(SHELL);
	process.arg("-c").arg(command);
	process
}

fn spawn_error(command: &str, source: io::Error) -> LaunchError {
	LaunchError::Spawn {
		command: command.to_owned(),
		source,
	}
}

/// Run `command` with stdout and stderr sharing one pipe and collect both.
fn capture_combined(command: &str) -> Result<(ExitStatus, String), LaunchError> {
	let capture_error = |source| LaunchError::Capture {
		command: command.to_owned(),
		source,
	};

	let (mut reader, writer) = io::pipe().map_err(capture_error)?;
	let mut process = shell(command);
	process
		.stdin(Stdio::null())
		.stdout(writer.try_clone().map_err(capture_error)?)
		.stderr(writer);
	let mut child = process
		.spawn()
		.map_err(|source| spawn_error(command, source))?;
	// The command holds the parent's copies of the write end.
	drop(process);

	let (status, buffer) = drain(&mut reader, &mut child).map_err(capture_error)?;
	Ok((status, String::from_utf8_lossy(&buffer).into_owned()))
}

/// Read `output` to the end, then reap `child`.
///
/// A failed read kills and reaps the child before returning the error.
fn drain(output: &mut impl Read, child: &mut Child) -> io::Result<(ExitStatus, Vec<u8>)> {
	let mut buffer = Vec::new();
	if let Err(err) = output.read_to_end(&mut buffer) {
		let _ = child.kill();
		let _ = child.wait();
		return Err(err);
	}
	Ok((child.wait()?, buffer))
}
