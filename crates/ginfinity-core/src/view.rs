//! Shared view handles.
//!
//! A [`View`] is a cheap, cloneable reference to a page factory owned by the
//! presentation layer. Routers store and clone the handle; calling
//! [`View::render`] produces a fresh [`Page`] each time.

use crate::page::Page;
use std::borrow::Cow;
use std::sync::Arc;

/// A named, shareable page factory.
#[derive(Clone)]
pub struct View {
	name: Cow<'static, str>,
	factory: Arc<dyn Fn() -> Page + Send + Sync>,
}

impl std::fmt::Debug for View {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("View").field("name", &self.name).finish()
	}
}

impl View {
	/// Creates a view from a page factory.
	pub fn new<F>(name: impl Into<Cow<'static, str>>, factory: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			factory: Arc::new(factory),
		}
	}

	/// Returns the view's display name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Renders a fresh page.
	pub fn render(&self) -> Page {
		(self.factory)()
	}

	/// Returns whether both handles point at the same factory.
	pub fn ptr_eq(&self, other: &View) -> bool {
		Arc::ptr_eq(&self.factory, &other.factory)
	}
}
