//! Discover launchable applications from freedesktop `.desktop` files.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

const DESKTOP_GROUP: &str = "[Desktop Entry]";
const DESKTOP_SUFFIX: &str = ".desktop";
const SYSTEM_APPLICATIONS: &str = "/usr/share/applications";

/// An application entry that can be listed and launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
	pub name: String,
	pub exec: String,
	pub path: PathBuf,
}

/// Directories scanned when no list is configured: the user's data directory
/// first, then the system-wide one.
pub fn default_dirs() -> Vec<PathBuf> {
	let mut dirs = Vec::new();
	if let Some(base) = BaseDirs::new() {
		dirs.push(base.data_dir().join("applications"));
	}
	dirs.push(PathBuf::from(SYSTEM_APPLICATIONS));
	dirs
}

/// Collect entries from every directory in `dirs`.
///
/// Missing or unreadable directories are skipped. When several files share a
/// name the one from the earliest directory wins. The result is sorted by
/// name, ignoring case.
pub fn discover(dirs: &[PathBuf]) -> Vec<AppEntry> {
	let mut seen = HashSet::new();
	let mut apps = Vec::new();

	for dir in dirs {
		let entries = match read_dir_entries(dir) {
			Ok(entries) => entries,
			Err(err) => {
				debug!(dir = %dir.display(), %err, "skipping application directory");
				continue;
			}
		};
		for entry in entries {
			if seen.insert(entry.name.clone()) {
				apps.push(entry);
			}
		}
	}

	apps.sort_by_cached_key(|app| app.name.to_lowercase());
	debug!(count = apps.len(), "discovered applications");
	apps
}

/// Parse every `.desktop` file directly inside `dir`.
pub fn read_dir_entries(dir: &Path) -> io::Result<Vec<AppEntry>> {
	let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
		.filter_map(Result::ok)
		.map(|entry| entry.path())
		.filter(|path| {
			path.is_file()
				&& path
					.file_name()
					.and_then(|name| name.to_str())
					.is_some_and(|name| name.ends_with(DESKTOP_SUFFIX))
		})
		.collect();
	paths.sort();

	Ok(paths
		.into_iter()
		.filter_map(|path| {
			let contents = fs::read_to_string(&path).ok()?;
			parse_entry(&path, &contents)
		})
		.collect())
}

/// Extract a launchable entry from desktop file `contents`.
///
/// Returns `None` for hidden entries, non-application entries and entries
/// lacking a name or command.
pub fn parse_entry(path: &Path, contents: &str) -> Option<AppEntry> {
	let mut in_group = false;
	let mut name = None;
	let mut exec = None;

	for line in contents.lines() {
		let line = line.trim();
		if line.starts_with('[') {
			in_group = line == DESKTOP_GROUP;
			continue;
		}
		if !in_group || line.starts_with('#') {
			continue;
		}
		let Some((key, value)) = line.split_once('=') else {
			continue;
		};
		let value = value.trim();
		match key.trim() {
			"Name" => name = Some(value.to_owned()),
			"Exec" => exec = Some(strip_field_codes(value)),
			"Type" if value != "Application" => return None,
			"NoDisplay" | "Hidden" if value.eq_ignore_ascii_case("true") => return None,
			_ => {}
		}
	}

	let name = name.filter(|name| !name.is_empty())?;
	let exec = exec.filter(|exec| !exec.is_empty())?;
	Some(AppEntry {
		name,
		exec,
		path: path.to_path_buf(),
	})
}

/// Remove `%f`-style field codes from an `Exec` value; `%%` becomes `%`.
pub fn strip_field_codes(exec: &str) -> String {
	let mut out = String::with_capacity(exec.len());
	let mut chars = exec.chars();
	while let Some(ch) = chars.next() {
		if ch != '%' {
			out.push(ch);
			continue;
		}
		match chars.next() {
			Some('%') => out.push('%'),
			Some(_) | None => {}
		}
	}
	out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	const FIREFOX: &str = "[Desktop Entry]
Type=Application
Name=Firefox
Name[de]=Feuerfuchs
Exec=firefox %u
[Desktop Action new-window]
Name=New Window
Exec=firefox --new-window %u
";

	#[test]
	fn parses_main_group_only() {
		let entry = parse_entry(Path::new("firefox.desktop"), FIREFOX).expect("entry");
		assert_eq!(entry.name, "Firefox");
		assert_eq!(entry.exec, "firefox");
	}

	#[test]
	fn hidden_and_incomplete_entries_are_skipped() {
		let hidden = "[Desktop Entry]\nName=Daemon\nExec=daemon\nNoDisplay=true\n";
		assert_eq!(parse_entry(Path::new("a.desktop"), hidden), None);
		let link = "[Desktop Entry]\nType=Link\nName=Docs\nExec=x\n";
		assert_eq!(parse_entry(Path::new("b.desktop"), link), None);
		let nameless = "[Desktop Entry]\nExec=thing\n";
		assert_eq!(parse_entry(Path::new("c.desktop"), nameless), None);
	}

	#[test]
	fn field_codes_are_removed() {
		assert_eq!(strip_field_codes("code %F"), "code");
		assert_eq!(strip_field_codes("env A=1 app %U --flag"), "env A=1 app --flag");
		assert_eq!(strip_field_codes("printf 100%%"), "printf 100%");
	}

	#[test]
	fn discovery_prefers_earlier_directories_and_sorts() {
		let user = tempdir().unwrap();
		let system = tempdir().unwrap();
		fs::write(
			user.path().join("term.desktop"),
			"[Desktop Entry]\nName=terminal\nExec=user-term\n",
		)
		.unwrap();
		fs::write(
			system.path().join("term.desktop"),
			"[Desktop Entry]\nName=terminal\nExec=system-term\n",
		)
		.unwrap();
		fs::write(system.path().join("ed.desktop"), "[Desktop Entry]\nName=Editor\nExec=ed %f\n").unwrap();
		fs::write(system.path().join("notes.txt"), "[Desktop Entry]\nName=Notes\nExec=n\n").unwrap();

		let missing = user.path().join("does-not-exist");
		let apps = discover(&[missing, user.path().to_path_buf(), system.path().to_path_buf()]);

		let summary: Vec<(&str, &str)> = apps
			.iter()
			.map(|app| (app.name.as_str(), app.exec.as_str()))
			.collect();
		assert_eq!(summary, [("Editor", "ed"), ("terminal", "user-term")]);
	}
}
