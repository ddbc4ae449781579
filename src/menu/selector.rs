use std::io;

use crate::picker::{Picker, PickerOptions};

/// What the navigator asks the user to choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest<'a> {
	pub labels: Vec<String>,
	pub prompt: &'a str,
	pub title: &'a str,
}

/// Runs one selection session for the navigator.
pub trait Selector {
	/// Return the picked label, or `None` when nothing was chosen.
	fn select(&mut self, request: SelectionRequest<'_>) -> io::Result<Option<String>>;
}

impl<T: Selector + ?Sized> Selector for &mut T {
	fn select(&mut self, request: SelectionRequest<'_>) -> io::Result<Option<String>> {
		(**self).select(request)
	}
}

/// [`Selector`] that opens an interactive [`Picker`] for every request.
#[derive(Debug, Clone)]
pub struct PickerSelector {
	options: PickerOptions,
}

impl PickerSelector {
	/// Sessions inherit everything from `options` except prompt and title.
	pub fn new(options: PickerOptions) -> Self {
		Self { options }
	}

	fn options_for(&self, request: &SelectionRequest<'_>) -> PickerOptions {
		PickerOptions {
			prompt: request.prompt.to_owned(),
			title: Some(request.title.to_owned()),
			..self.options.clone()
		}
	}
}

impl Selector for PickerSelector {
	fn select(&mut self, request: SelectionRequest<'_>) -> io::Result<Option<String>> {
		let options = self.options_for(&request);
		Picker::new(request.labels, options).run()
	}
}
