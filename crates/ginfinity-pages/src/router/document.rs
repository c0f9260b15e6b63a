//! Host document access (page title).

use std::cell::RefCell;
use std::rc::Rc;

/// The host document the router writes metadata into.
pub trait Document {
	/// Returns the current document title.
	fn title(&self) -> String;

	/// Sets the document title.
	fn set_title(&mut self, title: &str);
}

/// In-memory document. Clones share the same title.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
	title: Rc<RefCell<String>>,
}

impl MemoryDocument {
	/// Creates a document with an empty title.
	pub fn new() -> Self {
		Self::default()
	}
}

impl Document for MemoryDocument {
	fn title(&self) -> String {
		self.title.borrow().clone()
	}

	fn set_title(&mut self, title: &str) {
		*self.title.borrow_mut() = title.to_string();
	}
}
