//! Core of the `greg` terminal picker.
//!
//! [`picker`] implements the interactive filter/scroll selection engine,
//! [`menu`] layers hierarchical, optionally generated menus on top of it, and
//! [`launcher`] runs the shell commands those menus and application entries
//! point at.

pub mod app_dirs;
pub mod apps;
pub mod launcher;
pub mod logging;
pub mod menu;
pub mod picker;

pub use launcher::{LaunchError, Launcher, ShellLauncher};
pub use menu::{MenuConfig, MenuError, MenuNode, NavState, Navigator};
pub use picker::{MaxItems, Picker, PickerOptions, Theme};
