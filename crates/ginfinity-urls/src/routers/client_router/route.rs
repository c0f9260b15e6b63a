//! Route definitions.

use super::error::RouteTableError;
use super::pattern::ClientPathPattern;
use ginfinity_core::View;
use std::borrow::Cow;

/// Typed metadata attached to a route.
///
/// Only the page title is applied by the router today. New per-route
/// behaviors get their own typed field here rather than a free-form map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
	title: Option<Cow<'static, str>>,
}

impl RouteMeta {
	/// Creates empty metadata.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates metadata carrying a page title.
	pub fn titled(title: impl Into<Cow<'static, str>>) -> Self {
		Self::new().with_title(title)
	}

	/// Sets the page title.
	pub fn with_title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Returns the page title, if any.
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Returns the page title or `default` when none is declared.
	pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
		self.title().unwrap_or(default)
	}
}

/// A single navigable endpoint.
#[derive(Debug, Clone)]
pub struct RouteDefinition {
	pattern: ClientPathPattern,
	name: Cow<'static, str>,
	view: View,
	meta: RouteMeta,
}

impl RouteDefinition {
	/// Creates a route definition, compiling its path pattern.
	///
	/// # Errors
	///
	/// Returns [`RouteTableError::InvalidPattern`] if `path` does not compile.
	pub fn new(
		path: &str,
		name: impl Into<Cow<'static, str>>,
		view: View,
		meta: RouteMeta,
	) -> Result<Self, RouteTableError> {
		let pattern =
			ClientPathPattern::new(path).map_err(|source| RouteTableError::InvalidPattern {
				pattern: path.to_string(),
				source,
			})?;

		Ok(Self {
			pattern,
			name: name.into(),
			view,
			meta,
		})
	}

	/// Returns the path pattern string.
	pub fn path(&self) -> &str {
		self.pattern.pattern()
	}

	/// Returns the compiled pattern.
	pub fn pattern(&self) -> &ClientPathPattern {
		&self.pattern
	}

	/// Returns the route name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the bound view.
	pub fn view(&self) -> &View {
		&self.view
	}

	/// Returns the route metadata.
	pub fn meta(&self) -> &RouteMeta {
		&self.meta
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ginfinity_core::Page;
	use rstest::rstest;

	#[rstest]
	fn test_route_meta_title_fallback() {
		assert_eq!(RouteMeta::titled("Embedding ARN").title_or("Ginfinity"), "Embedding ARN");
		assert_eq!(RouteMeta::new().title_or("Ginfinity"), "Ginfinity");
	}

	#[rstest]
	fn test_route_definition_accessors() {
		let view = View::new("ComparadorARN", Page::empty);
		let route =
			RouteDefinition::new("/comparar-arn", "comparador-arn", view.clone(), RouteMeta::titled("Comparar ARN"))
				.unwrap();

		assert_eq!(route.path(), "/comparar-arn");
		assert_eq!(route.name(), "comparador-arn");
		assert_eq!(route.meta().title(), Some("Comparar ARN"));
		assert!(route.view().ptr_eq(&view));
		assert!(route.pattern().is_exact());
	}

	#[rstest]
	fn test_route_definition_rejects_relative_path() {
		let err = RouteDefinition::new("home", "home", View::new("HomeView", Page::empty), RouteMeta::new())
			.unwrap_err();
		assert!(matches!(err, RouteTableError::InvalidPattern { ref pattern, .. } if pattern == "home"));
	}
}
