//! Core Router Implementation.
//!
//! Every navigation runs to completion inside one call: look the target up,
//! write host history (unless the host already moved), update the
//! [`NavigationState`], apply the route's title and mount its view.

use super::document::Document;
use super::error::NavigationError;
use super::history::{BasePath, History};
use super::outlet::Outlet;
use super::state::{NavigationState, RouteStatus};
use ginfinity_core::{IntoPage, Page, PageElement, View};
use ginfinity_urls::prelude::{RouteMatch, RouteTable, RouteTableError};
use std::borrow::Cow;
use std::collections::HashMap;

/// Default document title when a route declares none.
const DEFAULT_APP_NAME: &str = "Ginfinity";

/// Default document title while unresolved.
const DEFAULT_NOT_FOUND_TITLE: &str = "Not Found";

/// Listener notified after every resolution.
type StateListener = Box<dyn FnMut(&NavigationState)>;

/// Where a navigation should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
	/// A concrete path, optionally followed by `?query` or `#fragment`.
	Path(String),
	/// A named route with path parameters.
	Name {
		/// Route name.
		name: String,
		/// Path parameters used to build the path.
		params: HashMap<String, String>,
	},
}

impl Target {
	/// Targets a concrete path.
	pub fn path(path: impl Into<String>) -> Self {
		Self::Path(path.into())
	}

	/// Targets a named route.
	pub fn name(name: impl Into<String>) -> Self {
		Self::Name {
			name: name.into(),
			params: HashMap::new(),
		}
	}

	/// Adds a path parameter. Ignored for path targets.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		if let Self::Name { params, .. } = &mut self {
			params.insert(key.into(), value.into());
		}
		self
	}
}

/// Strings starting with `/` are paths; anything else is a route name.
impl From<&str> for Target {
	fn from(target: &str) -> Self {
		if target.starts_with('/') {
			Self::path(target)
		} else {
			Self::name(target)
		}
	}
}

impl From<String> for Target {
	fn from(target: String) -> Self {
		if target.starts_with('/') {
			Self::Path(target)
		} else {
			Self::name(target)
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavigationKind {
	Push,
	Replace,
	/// The host already changed location (startup, back/forward).
	Resync,
}

/// The client-side router.
///
/// Owns the route table and the navigation state for the lifetime of the
/// application. Host services are injected at construction.
pub struct Router {
	routes: RouteTable,
	history: Box<dyn History>,
	document: Box<dyn Document>,
	outlet: Box<dyn Outlet>,
	base: BasePath,
	default_title: Cow<'static, str>,
	not_found_title: Cow<'static, str>,
	not_found: Option<View>,
	state: NavigationState,
	listeners: Vec<StateListener>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.routes.len())
			.field("base", &self.base)
			.field("default_title", &self.default_title)
			.field("state", &self.state)
			.field("listeners", &self.listeners.len())
			.finish()
	}
}

impl Router {
	/// Creates a router in the `Unresolved` state.
	///
	/// Nothing is mounted until [`Router::resolve_current_location`] or a
	/// navigation runs.
	pub fn new(
		routes: RouteTable,
		history: impl History + 'static,
		document: impl Document + 'static,
		outlet: impl Outlet + 'static,
	) -> Self {
		Self {
			routes,
			history: Box::new(history),
			document: Box::new(document),
			outlet: Box::new(outlet),
			base: BasePath::default(),
			default_title: Cow::Borrowed(DEFAULT_APP_NAME),
			not_found_title: Cow::Borrowed(DEFAULT_NOT_FOUND_TITLE),
			not_found: None,
			state: NavigationState::default(),
			listeners: Vec::new(),
		}
	}

	/// Sets the title applied when a route declares none.
	pub fn with_default_title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
		self.default_title = title.into();
		self
	}

	/// Sets the title applied while unresolved.
	pub fn with_not_found_title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
		self.not_found_title = title.into();
		self
	}

	/// Sets the base URL the application is served under.
	pub fn with_base_url(mut self, base: &str) -> Self {
		self.base = BasePath::new(base);
		self
	}

	/// Sets the view mounted while unresolved.
	pub fn with_not_found(mut self, view: View) -> Self {
		self.not_found = Some(view);
		self
	}

	/// Registers a listener called after every resolution, successful or not.
	pub fn subscribe<F>(&mut self, listener: F)
	where
		F: FnMut(&NavigationState) + 'static,
	{
		self.listeners.push(Box::new(listener));
	}

	/// Returns the route table.
	pub fn routes(&self) -> &RouteTable {
		&self.routes
	}

	/// Returns the navigation state.
	pub fn state(&self) -> &NavigationState {
		&self.state
	}

	/// Returns the normalized base URL.
	pub fn base(&self) -> &BasePath {
		&self.base
	}

	/// Returns the title applied when a route declares none.
	pub fn default_title(&self) -> &str {
		&self.default_title
	}

	/// Returns the active route's name.
	pub fn current_route_name(&self) -> Option<&str> {
		self.state.current_route_name()
	}

	/// Returns whether a route is active.
	pub fn is_resolved(&self) -> bool {
		self.state.is_resolved()
	}

	/// Navigates to a path or named route, pushing a history entry.
	///
	/// An unknown target leaves the router `Unresolved`; the error is
	/// recorded in the returned status rather than returned as `Err`.
	pub fn navigate(&mut self, target: impl Into<Target>) -> RouteStatus {
		self.transition(target.into(), NavigationKind::Push)
	}

	/// Navigates like [`Router::navigate`] but replaces the current entry.
	pub fn replace(&mut self, target: impl Into<Target>) -> RouteStatus {
		self.transition(target.into(), NavigationKind::Replace)
	}

	/// Resolves the host's current location without writing history.
	///
	/// Called once at startup and after every host transition.
	pub fn resolve_current_location(&mut self) -> RouteStatus {
		let location = match self.history.current_path() {
			Ok(location) => location,
			Err(err) => return self.fail(None, err.into()),
		};

		let Some(path) = self.base.strip(&location).map(Cow::into_owned) else {
			tracing::debug!(%location, base = self.base.as_str(), "location outside base url");
			return self.fail(Some(location.clone()), NavigationError::RouteNotFound(location));
		};

		self.transition(Target::Path(path), NavigationKind::Resync)
	}

	/// Handles a host back/forward transition.
	pub fn on_host_transition(&mut self) -> RouteStatus {
		tracing::debug!("host history transition");
		self.resolve_current_location()
	}

	/// Renders the page for the current state.
	pub fn render_current(&self) -> Page {
		match self.state.current_route() {
			Some(route) => route.view().render(),
			None => self.not_found_page(),
		}
	}

	fn transition(&mut self, target: Target, kind: NavigationKind) -> RouteStatus {
		let (path, suffix) = match target {
			Target::Path(raw) => split_location(&raw),
			Target::Name { name, params } => match self.routes.reverse(&name, &params) {
				Ok(path) => (path, String::new()),
				Err(RouteTableError::UnknownName(name)) => {
					return self.fail(None, NavigationError::RouteNotFound(name));
				}
				Err(err) => return self.fail(None, NavigationError::Reverse(err)),
			},
		};

		let Some(route_match) = self.routes.lookup(&path) else {
			let observed = (kind == NavigationKind::Resync).then(|| path.clone());
			return self.fail(observed, NavigationError::RouteNotFound(path));
		};

		let location = format!("{}{}", self.base.join(&path), suffix);
		let written = match kind {
			NavigationKind::Push => self.history.push_path(&location),
			NavigationKind::Replace => self.history.replace_path(&location),
			NavigationKind::Resync => Ok(()),
		};
		if let Err(err) = written {
			return self.fail(None, err.into());
		}

		self.commit(path, route_match)
	}

	fn commit(&mut self, path: String, route_match: RouteMatch) -> RouteStatus {
		let RouteMatch { route, params } = route_match;

		tracing::debug!(path = %path, route = route.name(), "route resolved");

		self.document
			.set_title(route.meta().title_or(&self.default_title));
		self.outlet.mount(route.view().render());

		self.state.current_path = Some(path);
		self.state.current_route = Some(route);
		self.state.params = params;
		self.state.status = RouteStatus::Resolved;

		self.notify()
	}

	/// Moves to `Unresolved`. `observed_path` is set when the host location
	/// itself is known to be unmatched; otherwise the previous path stays.
	fn fail(&mut self, observed_path: Option<String>, reason: NavigationError) -> RouteStatus {
		tracing::warn!(%reason, "navigation unresolved");

		if let Some(path) = observed_path {
			self.state.current_path = Some(path);
		}
		self.state.current_route = None;
		self.state.params.clear();
		self.state.status = RouteStatus::Unresolved {
			reason: Some(reason),
		};

		self.document.set_title(&self.not_found_title);
		let page = self.not_found_page();
		self.outlet.mount(page);

		self.notify()
	}

	fn notify(&mut self) -> RouteStatus {
		for listener in &mut self.listeners {
			listener(&self.state);
		}
		self.state.status.clone()
	}

	fn not_found_page(&self) -> Page {
		match &self.not_found {
			Some(view) => view.render(),
			None => PageElement::new("main")
				.attr("class", "not-found")
				.child(PageElement::new("h1").child(self.not_found_title.to_string()))
				.into_page(),
		}
	}
}

/// Splits `?query` / `#fragment` off a location.
fn split_location(location: &str) -> (String, String) {
	match location.find(['?', '#']) {
		Some(index) => (location[..index].to_string(), location[index..].to_string()),
		None => (location.to_string(), String::new()),
	}
}
