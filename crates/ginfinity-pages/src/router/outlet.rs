//! Where the active view is mounted.

use ginfinity_core::Page;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the page of the active route after every resolution.
pub trait Outlet {
	/// Replaces the mounted page.
	fn mount(&mut self, page: Page);
}

/// In-memory outlet recording every mounted page.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutlet {
	mounted: Rc<RefCell<Vec<Page>>>,
}

impl MemoryOutlet {
	/// Creates an empty outlet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the page currently mounted.
	pub fn current(&self) -> Option<Page> {
		self.mounted.borrow().last().cloned()
	}

	/// Returns the number of mounts so far.
	pub fn mount_count(&self) -> usize {
		self.mounted.borrow().len()
	}

	/// Returns the current page rendered to HTML, or an empty string.
	pub fn html(&self) -> String {
		self.current()
			.map(|page| page.render_to_string())
			.unwrap_or_default()
	}
}

impl Outlet for MemoryOutlet {
	fn mount(&mut self, page: Page) {
		self.mounted.borrow_mut().push(page);
	}
}
