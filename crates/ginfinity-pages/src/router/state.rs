//! Navigation state owned by the router.

use super::error::NavigationError;
use ginfinity_urls::prelude::RouteDefinition;
use std::collections::HashMap;

/// Outcome of the latest resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteStatus {
	/// A route is matched, its view mounted and its title applied.
	Resolved,
	/// No route is active. `reason` is `None` before the first resolution.
	Unresolved {
		/// Why the last navigation failed.
		reason: Option<NavigationError>,
	},
}

impl RouteStatus {
	/// Returns whether a route is active.
	pub fn is_resolved(&self) -> bool {
		matches!(self, Self::Resolved)
	}
}

/// The router's view of where the application is.
///
/// Only the router writes this; everything else reads it through
/// [`Router::state`](super::Router::state).
#[derive(Debug, Clone)]
pub struct NavigationState {
	pub(super) current_path: Option<String>,
	pub(super) current_route: Option<RouteDefinition>,
	pub(super) params: HashMap<String, String>,
	pub(super) status: RouteStatus,
}

impl Default for NavigationState {
	fn default() -> Self {
		Self {
			current_path: None,
			current_route: None,
			params: HashMap::new(),
			status: RouteStatus::Unresolved { reason: None },
		}
	}
}

impl NavigationState {
	/// Returns the host location relative to the base URL, once known.
	pub fn current_path(&self) -> Option<&str> {
		self.current_path.as_deref()
	}

	/// Returns the active route.
	pub fn current_route(&self) -> Option<&RouteDefinition> {
		self.current_route.as_ref()
	}

	/// Returns the active route's name.
	pub fn current_route_name(&self) -> Option<&str> {
		self.current_route.as_ref().map(RouteDefinition::name)
	}

	/// Returns the path parameters of the active route.
	pub fn params(&self) -> &HashMap<String, String> {
		&self.params
	}

	/// Returns the resolution status.
	pub fn status(&self) -> &RouteStatus {
		&self.status
	}

	/// Returns whether a route is active.
	pub fn is_resolved(&self) -> bool {
		self.status.is_resolved()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_initial_state_is_unresolved() {
		let state = NavigationState::default();

		assert!(!state.is_resolved());
		assert_eq!(state.status(), &RouteStatus::Unresolved { reason: None });
		assert!(state.current_path().is_none());
		assert!(state.current_route_name().is_none());
		assert!(state.params().is_empty());
	}
}
