//! Host navigation history.
//!
//! The router never stores back/forward entries itself. It writes through
//! [`History`] and re-reads the host location when the host reports a
//! transition.

use super::error::HistoryError;
use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

/// Access to the host's navigation history.
pub trait History {
	/// Returns the full location path (including any base URL).
	fn current_path(&self) -> Result<String, HistoryError>;

	/// Pushes a new entry.
	fn push_path(&mut self, path: &str) -> Result<(), HistoryError>;

	/// Replaces the current entry.
	fn replace_path(&mut self, path: &str) -> Result<(), HistoryError>;
}

/// The prefix an application is served under.
///
/// Stored without a trailing slash, so the root base `/` is the empty
/// string and `/app/` is `/app`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
	/// Normalizes a base URL.
	pub fn new(base: &str) -> Self {
		let trimmed = base.trim().trim_end_matches('/');
		if trimmed.is_empty() {
			Self(String::new())
		} else if trimmed.starts_with('/') {
			Self(trimmed.to_string())
		} else {
			Self(format!("/{}", trimmed))
		}
	}

	/// Returns the normalized prefix.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Prefixes a route path with the base.
	pub fn join(&self, path: &str) -> String {
		format!("{}{}", self.0, path)
	}

	/// Strips the base from a host location.
	///
	/// Returns `None` when the location lies outside the base. The bare
	/// base (`/app`, `/app?q`, `/app#top`) maps to `/`, keeping any query
	/// or fragment.
	pub fn strip<'a>(&self, location: &'a str) -> Option<Cow<'a, str>> {
		let rest = location.strip_prefix(self.0.as_str())?;
		if rest.is_empty() {
			Some(Cow::Borrowed("/"))
		} else if rest.starts_with('/') {
			Some(Cow::Borrowed(rest))
		} else if rest.starts_with(['?', '#']) {
			Some(Cow::Owned(format!("/{}", rest)))
		} else {
			None
		}
	}
}

#[derive(Debug)]
struct MemoryHistoryInner {
	entries: Vec<String>,
	index: usize,
}

/// In-memory history with browser semantics.
///
/// Clones share the same stack, so a test can keep a handle after moving
/// one into a router. Pushing discards any forward entries.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
	inner: Rc<RefCell<MemoryHistoryInner>>,
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("/")
	}
}

impl MemoryHistory {
	/// Creates a history whose only entry is `initial`.
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			inner: Rc::new(RefCell::new(MemoryHistoryInner {
				entries: vec![initial.into()],
				index: 0,
			})),
		}
	}

	/// Moves one entry back. Returns `false` at the start of history.
	pub fn back(&self) -> bool {
		let mut inner = self.inner.borrow_mut();
		if inner.index == 0 {
			return false;
		}
		inner.index -= 1;
		true
	}

	/// Moves one entry forward. Returns `false` at the end of history.
	pub fn forward(&self) -> bool {
		let mut inner = self.inner.borrow_mut();
		if inner.index + 1 >= inner.entries.len() {
			return false;
		}
		inner.index += 1;
		true
	}

	/// Returns all entries, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.inner.borrow().entries.clone()
	}

	/// Returns the index of the current entry.
	pub fn position(&self) -> usize {
		self.inner.borrow().index
	}

	/// Returns the current entry.
	pub fn location(&self) -> String {
		let inner = self.inner.borrow();
		inner.entries[inner.index].clone()
	}
}

impl History for MemoryHistory {
	fn current_path(&self) -> Result<String, HistoryError> {
		Ok(self.location())
	}

	fn push_path(&mut self, path: &str) -> Result<(), HistoryError> {
		let mut inner = self.inner.borrow_mut();
		let next = inner.index + 1;
		inner.entries.truncate(next);
		inner.entries.push(path.to_string());
		inner.index = next;
		Ok(())
	}

	fn replace_path(&mut self, path: &str) -> Result<(), HistoryError> {
		let mut inner = self.inner.borrow_mut();
		let index = inner.index;
		inner.entries[index] = path.to_string();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/", "")]
	#[case("", "")]
	#[case("/app/", "/app")]
	#[case("app", "/app")]
	#[case("/a/b//", "/a/b")]
	fn test_base_path_normalization(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(BasePath::new(raw).as_str(), expected);
	}

	#[rstest]
	#[case("/", "/compare", Some("/compare"))]
	#[case("/app/", "/app/compare", Some("/compare"))]
	#[case("/app/", "/app", Some("/"))]
	#[case("/app/", "/app?x=1", Some("/?x=1"))]
	#[case("/app/", "/app#top", Some("/#top"))]
	#[case("/app/", "/app/?x=1", Some("/?x=1"))]
	#[case("/", "/?x=1", Some("/?x=1"))]
	#[case("/app/", "/application", None)]
	#[case("/app/", "/compare", None)]
	fn test_base_path_strip(#[case] base: &str, #[case] location: &str, #[case] expected: Option<&str>) {
		assert_eq!(BasePath::new(base).strip(location).as_deref(), expected);
	}

	#[rstest]
	fn test_base_path_join() {
		assert_eq!(BasePath::new("/").join("/compare"), "/compare");
		assert_eq!(BasePath::new("/app/").join("/"), "/app/");
	}

	#[rstest]
	fn test_memory_history_push_back_forward() {
		let mut history = MemoryHistory::new("/");
		history.push_path("/a").unwrap();
		history.push_path("/b").unwrap();

		assert_eq!(history.location(), "/b");
		assert!(history.back());
		assert_eq!(history.current_path().unwrap(), "/a");
		assert!(history.forward());
		assert_eq!(history.location(), "/b");
		assert!(!history.forward());
	}

	#[rstest]
	fn test_memory_history_push_truncates_forward_entries() {
		let mut history = MemoryHistory::new("/");
		history.push_path("/a").unwrap();
		history.push_path("/b").unwrap();
		history.back();
		history.back();
		assert!(!history.back());

		history.push_path("/c").unwrap();

		assert_eq!(history.entries(), ["/", "/c"]);
		assert_eq!(history.position(), 1);
	}

	#[rstest]
	fn test_memory_history_replace_and_shared_handle() {
		let history = MemoryHistory::new("/");
		let mut writer = history.clone();

		writer.replace_path("/compare").unwrap();

		assert_eq!(history.entries(), ["/compare"]);
	}
}
