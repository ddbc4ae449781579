//! Hierarchical menus driven by repeated picker sessions.
//!
//! [`MenuConfig`] is loaded from a TOML menu file. The [`Navigator`] walks it
//! one level at a time through a [`Selector`], expanding generator entries by
//! running their command and dispatching leaf commands through a
//! [`Launcher`](crate::launcher::Launcher).

mod error;
mod model;
mod navigator;
mod selector;

pub use error::MenuError;
pub use model::{MenuConfig, MenuNode, NodeAction, parse_generated};
pub use navigator::{Level, NavState, Navigator};
pub use selector::{PickerSelector, SelectionRequest, Selector};
