//! Configuration loading and resolution.
//!
//! `load` is the entry point: it stacks the config files, the `file` chain,
//! `GREG__*` environment variables and CLI flags into a [`RawConfig`], then
//! resolves that into immutable [`Settings`].

mod chain;
mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub(crate) use loader::load;
pub(crate) use resolved::Settings;
