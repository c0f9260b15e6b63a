//! The validated route table.
//!
//! A [`RouteTable`] is built once at startup and never changes. Building
//! checks that every path and every name is unique; lookups afterwards
//! assume the table is consistent and never re-validate.

use super::error::{ReverseError, RouteTableError};
use super::route::{RouteDefinition, RouteMeta};
use ginfinity_core::View;
use std::borrow::Cow;
use std::collections::HashMap;

/// A route matched against a concrete path.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// The matched route.
	pub route: RouteDefinition,
	/// Extracted path parameters (empty for exact routes).
	pub params: HashMap<String, String>,
}

/// An ordered, immutable collection of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
	routes: Vec<RouteDefinition>,
	/// Exact paths to route index.
	exact: HashMap<String, usize>,
	/// Route names to route index.
	named: HashMap<String, usize>,
}

impl RouteTable {
	/// Creates a table from already compiled definitions.
	///
	/// # Errors
	///
	/// Returns [`RouteTableError::DuplicatePath`] or
	/// [`RouteTableError::DuplicateName`] on the first collision in
	/// declaration order. Patterns that differ only in parameter names
	/// (`/runs/{id}` and `/runs/{run}`) count as the same path.
	pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, RouteTableError> {
		let mut exact: HashMap<String, usize> = HashMap::new();
		let mut named: HashMap<String, usize> = HashMap::new();
		let mut shapes: HashMap<String, usize> = HashMap::new();

		for (index, route) in routes.iter().enumerate() {
			if let Some(&first) = shapes.get(route.pattern().shape()) {
				return Err(RouteTableError::DuplicatePath {
					path: route.path().to_string(),
					first: routes[first].name().to_string(),
					second: route.name().to_string(),
				});
			}
			shapes.insert(route.pattern().shape().to_string(), index);

			if let Some(&first) = named.get(route.name()) {
				return Err(RouteTableError::DuplicateName {
					name: route.name().to_string(),
					first: routes[first].path().to_string(),
					second: route.path().to_string(),
				});
			}
			named.insert(route.name().to_string(), index);

			if route.pattern().is_exact() {
				exact.insert(route.path().to_string(), index);
			}
		}

		tracing::debug!(routes = routes.len(), "route table built");

		Ok(Self {
			routes,
			exact,
			named,
		})
	}

	/// Starts a table builder.
	pub fn builder() -> RouteTableBuilder {
		RouteTableBuilder::default()
	}

	/// Matches a path against the table.
	///
	/// Exact routes are consulted before parameterized ones; among
	/// parameterized routes the first declared match wins.
	pub fn lookup(&self, path: &str) -> Option<RouteMatch> {
		if let Some(&index) = self.exact.get(path) {
			return Some(RouteMatch {
				route: self.routes[index].clone(),
				params: HashMap::new(),
			});
		}

		self.routes
			.iter()
			.filter(|route| !route.pattern().is_exact())
			.find_map(|route| {
				route.pattern().matches(path).map(|params| RouteMatch {
					route: route.clone(),
					params,
				})
			})
	}

	/// Returns the route with the given name.
	pub fn by_name(&self, name: &str) -> Option<&RouteDefinition> {
		self.named.get(name).map(|&index| &self.routes[index])
	}

	/// Generates a concrete path for a named route.
	///
	/// # Errors
	///
	/// Returns [`RouteTableError::UnknownName`],
	/// [`RouteTableError::MissingParameter`] or
	/// [`RouteTableError::InvalidParameter`].
	pub fn reverse(
		&self,
		name: &str,
		params: &HashMap<String, String>,
	) -> Result<String, RouteTableError> {
		let route = self
			.by_name(name)
			.ok_or_else(|| RouteTableError::UnknownName(name.to_string()))?;

		route.pattern().reverse(params).map_err(|err| match err {
			ReverseError::Missing(param) => RouteTableError::MissingParameter {
				name: name.to_string(),
				param,
			},
			ReverseError::InvalidValue { param, value } => RouteTableError::InvalidParameter {
				name: name.to_string(),
				param,
				value,
			},
		})
	}

	/// Iterates over routes in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
		self.routes.iter()
	}

	/// Returns the number of routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether the table has no routes.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named.contains_key(name)
	}
}

impl<'a> IntoIterator for &'a RouteTable {
	type Item = &'a RouteDefinition;
	type IntoIter = std::slice::Iter<'a, RouteDefinition>;

	fn into_iter(self) -> Self::IntoIter {
		self.routes.iter()
	}
}

/// Declarative builder for a [`RouteTable`].
///
/// Patterns are compiled and uniqueness is checked only in
/// [`RouteTableBuilder::build`], so declaration reads like a plain list.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
	pending: Vec<(String, Cow<'static, str>, View, RouteMeta)>,
}

impl RouteTableBuilder {
	/// Declares a route.
	pub fn route(
		mut self,
		path: impl Into<String>,
		name: impl Into<Cow<'static, str>>,
		view: View,
		meta: RouteMeta,
	) -> Self {
		self.pending.push((path.into(), name.into(), view, meta));
		self
	}

	/// Compiles and validates the declared routes.
	///
	/// # Errors
	///
	/// Returns the first pattern or uniqueness error; no partial table is
	/// produced.
	pub fn build(self) -> Result<RouteTable, RouteTableError> {
		let routes = self
			.pending
			.into_iter()
			.map(|(path, name, view, meta)| RouteDefinition::new(&path, name, view, meta))
			.collect::<Result<Vec<_>, _>>()?;

		RouteTable::new(routes)
	}
}
