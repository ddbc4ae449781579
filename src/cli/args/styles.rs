use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use greg::app_dirs;

/// Version banner followed by the locations greg reads and writes.
pub(super) fn long_version() -> &'static str {
	let lines = [
		format!("greg {}", env!("CARGO_PKG_VERSION")),
		String::new(),
		location("config directory", app_dirs::get_config_dir()),
		location("default menu", app_dirs::default_menu_file()),
		location("log directory", app_dirs::get_data_dir()),
	];
	Box::leak(lines.join("\n").into_boxed_str())
}

fn location(label: &str, path: anyhow::Result<std::path::PathBuf>) -> String {
	match path {
		Ok(path) => format!("{label}: {}", path.display()),
		Err(err) => format!("{label}: unavailable ({err})"),
	}
}

/// Help colours: headings in the prompt colour, flags in the title colour.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::BrightBlack.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
