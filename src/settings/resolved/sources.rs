use std::env;
use std::fmt;

/// Layer a configuration value is attributed to in error messages and the
/// summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	/// A config file, including chained ones.
	File(&'static str),
}

impl SettingSource {
	/// Attribute `key` to the highest layer that could have set it.
	///
	/// `cli_flag` is the flag that overrode the value on this run, if any.
	pub(crate) fn detect(key: &'static str, cli_flag: Option<&'static str>) -> Self {
		if let Some(flag) = cli_flag {
			return Self::CliFlag(flag);
		}
		let var = env_var_for(key);
		if env::var_os(&var).is_some() {
			return Self::Environment(var);
		}
		Self::File(key)
	}
}

/// Environment variable overriding a dotted configuration key.
pub(crate) fn env_var_for(key: &str) -> String {
	format!("GREG__{}", key.replace('.', "__").to_ascii_uppercase())
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "flag `{flag}`"),
			Self::Environment(var) => write!(f, "`${var}`"),
			Self::File(key) => write!(f, "config key `{key}`"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn env_names_follow_the_double_underscore_separator() {
		assert_eq!(env_var_for("colors.selected"), "GREG__COLORS__SELECTED");
		assert_eq!(env_var_for("default_max"), "GREG__DEFAULT_MAX");
	}

	#[test]
	fn cli_flags_win_attribution() {
		assert_eq!(
			SettingSource::detect("max_items", Some("--max-items")),
			SettingSource::CliFlag("--max-items")
		);
	}

	#[test]
	fn unset_environment_falls_back_to_files() {
		let source = SettingSource::detect("colors.surely_not_a_real_key", None);
		assert_eq!(source, SettingSource::File("colors.surely_not_a_real_key"));
		assert_eq!(source.to_string(), "config key `colors.surely_not_a_real_key`");
	}
}
