use clap::ValueEnum;

/// Where candidates come from and what happens with the selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Mode {
	/// Pick one of the lines piped to stdin and print it.
	Dmenu,
	/// Pick an installed application and launch it.
	Apps,
	/// Browse the configured menu tree.
	Menu,
}

impl Mode {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Mode::Dmenu => "dmenu",
			Mode::Apps => "apps",
			Mode::Menu => "menu",
		}
	}
}
