mod args;
mod output;

pub(crate) use args::{CliArgs, Mode, parse_cli};
pub(crate) use output::write_selection;
