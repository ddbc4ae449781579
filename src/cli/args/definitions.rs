use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::Mode;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `greg` binary.
#[derive(Parser, Debug)]
#[command(
	name = "greg",
	version,
	long_version = long_version(),
	about = "Terminal picker for piped lines, applications and menus",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long,
		value_enum,
		default_value_t = Mode::Apps,
		help = "Where candidates come from"
	)]
	pub(crate) mode: Mode,
	#[arg(
		short,
		long,
		value_name = "TEXT",
		help = "Prompt shown before the input (default: search>)"
	)]
	pub(crate) prompt: Option<String>,
	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "Write the dmenu selection to a file instead of stdout"
	)]
	pub(crate) out: Option<PathBuf>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Header line above the prompt (default: greg with key help)"
	)]
	pub(crate) header: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "GREG_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading the default configuration file"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "max-items",
		value_name = "COUNT",
		allow_negative_numbers = true,
		help = "Rows of items to show; zero or less fills the terminal"
	)]
	pub(crate) max_items: Option<i64>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Menu file used in menu mode (default: menu.toml in the config directory)"
	)]
	pub(crate) menu: Option<PathBuf>,
	#[arg(long, help = "Append debug logs to greg.log in the data directory")]
	pub(crate) log: bool,
	#[arg(long = "print-config", help = "Print the resolved configuration before running")]
	pub(crate) print_config: bool,
}
