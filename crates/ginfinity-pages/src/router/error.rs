//! Navigation errors.
//!
//! None of these escape [`Router::navigate`](super::Router::navigate): they
//! are recorded in [`RouteStatus::Unresolved`](super::RouteStatus) for the
//! presentation layer to inspect.

use ginfinity_urls::prelude::RouteTableError;
use thiserror::Error;

/// Error raised by a host history implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
	/// The host has no history API (no window, detached document, ...).
	#[error("History API unavailable: {0}")]
	Unavailable(String),
	/// The host refused the state change.
	#[error("History update rejected: {0}")]
	Rejected(String),
}

/// Why a navigation ended unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
	/// No route matches the path or name.
	#[error("Route not found: {0}")]
	RouteNotFound(String),
	/// A named target could not be turned into a path.
	#[error("Failed to build route path: {0}")]
	Reverse(#[source] RouteTableError),
	/// The host history could not be read or written.
	#[error("Navigation failed: {0}")]
	History(#[from] HistoryError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_navigation_error_display() {
		assert_eq!(
			NavigationError::RouteNotFound("/does-not-exist".to_string()).to_string(),
			"Route not found: /does-not-exist"
		);
		assert_eq!(
			NavigationError::from(HistoryError::Rejected("quota".to_string())).to_string(),
			"Navigation failed: History update rejected: quota"
		);
	}

	#[rstest]
	fn test_reverse_error_source() {
		let err = NavigationError::Reverse(RouteTableError::MissingParameter {
			name: "run".to_string(),
			param: "id".to_string(),
		});
		assert!(std::error::Error::source(&err).is_some());
	}
}
