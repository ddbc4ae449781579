use std::path::PathBuf;

use greg::picker::MaxItems;

use super::Settings;

pub(super) fn print_summary(settings: &Settings) {
	for line in summary_lines(settings) {
		println!("{line}");
	}
}

fn summary_lines(settings: &Settings) -> Vec<String> {
	let max_items = match settings.max_items {
		MaxItems::Auto => "auto (terminal height)".to_string(),
		MaxItems::Fixed(count) => count.to_string(),
	};
	let max_items = match &settings.max_items_source {
		Some(source) => format!("{max_items} (from {source})"),
		None => max_items,
	};

	vec![
		"Effective configuration:".to_string(),
		format!("  Max items: {max_items}"),
		format!("  Default max: {}", settings.default_max),
		format!("  Logging: {}", bool_to_word(settings.log)),
		format!("  Menu file: {}", settings.menu_file.display()),
		format!("  Application directories: {}", join_paths(&settings.apps_dirs)),
	]
}

fn join_paths(paths: &[PathBuf]) -> String {
	if paths.is_empty() {
		return "(none)".to_string();
	}
	paths
		.iter()
		.map(|path| path.display().to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
