//! Application routes and bootstrap.
//!
//! [`launch`] is the only startup path: it validates settings, builds the
//! route table (a duplicate path or name aborts startup), constructs the
//! [`Router`] and resolves the location the host started at.

use crate::views;
use ginfinity_conf::{DevProxySettings, Settings, SettingsError};
use ginfinity_pages::Router;
use ginfinity_pages::router::{BasePath, Document, History, Outlet};
use ginfinity_urls::prelude::{RouteMeta, RouteTable, RouteTableError};

/// Startup failure. The application must not start after any of these.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
	/// Settings failed validation.
	#[error("Invalid settings: {0}")]
	Settings(#[from] SettingsError),
	/// The route table is ambiguous or malformed.
	#[error("Invalid route table: {0}")]
	Routes(#[from] RouteTableError),
	/// Host services could not be bound.
	#[cfg(target_arch = "wasm32")]
	#[error("Host unavailable: {0}")]
	Host(#[from] ginfinity_pages::router::HistoryError),
}

/// The application's route table.
pub fn routes() -> Result<RouteTable, RouteTableError> {
	RouteTable::builder()
		.route("/", "home", views::home(), RouteMeta::titled("Home"))
		.route(
			"/comparar-arn",
			"comparador-arn",
			views::comparador_arn(),
			RouteMeta::titled("Comparar ARN"),
		)
		.route(
			"/embedding-arn",
			"embedding-arn",
			views::embedding_arn(),
			RouteMeta::titled("Embedding ARN"),
		)
		.route(
			"/calcular-embeddings",
			"calcular-embeddings",
			views::calcular_embeddings(),
			RouteMeta::titled("Calcular Embeddings"),
		)
		.build()
}

/// Returns `(route name, proxy prefix)` for every route the dev server
/// would forward to the backend instead of serving the application.
pub fn shadowed_routes<'a>(
	routes: &'a RouteTable,
	proxy: &'a DevProxySettings,
) -> Vec<(&'a str, &'a str)> {
	routes
		.iter()
		.filter_map(|route| {
			proxy
				.matching_prefix(route.path())
				.map(|prefix| (route.name(), prefix))
		})
		.collect()
}

/// Starts the application with its own route table.
pub fn launch(
	settings: &Settings,
	history: impl History + 'static,
	document: impl Document + 'static,
	outlet: impl Outlet + 'static,
) -> Result<Router, LaunchError> {
	launch_with_routes(settings, routes()?, history, document, outlet)
}

/// Starts the application with an explicit route table.
pub fn launch_with_routes(
	settings: &Settings,
	routes: RouteTable,
	history: impl History + 'static,
	document: impl Document + 'static,
	outlet: impl Outlet + 'static,
) -> Result<Router, LaunchError> {
	settings.validate()?;

	for (route, prefix) in shadowed_routes(&routes, &settings.dev_proxy) {
		tracing::warn!(
			route,
			prefix,
			backend = %settings.dev_proxy.target,
			"route is shadowed by a dev proxy prefix"
		);
	}

	let mut router = Router::new(routes, history, document, outlet)
		.with_base_url(&settings.base_url)
		.with_default_title(settings.app_name.clone())
		.with_not_found_title(settings.not_found_title.clone())
		.with_not_found(views::not_found(&BasePath::new(&settings.base_url)));

	let status = router.resolve_current_location();
	tracing::info!(
		routes = router.routes().len(),
		base = router.base().as_str(),
		resolved = status.is_resolved(),
		"router started"
	);

	Ok(router)
}

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::*;
	use ginfinity_pages::router::{
		BrowserDocument, BrowserHistory, BrowserOutlet, listen_host_transitions,
		listen_link_clicks,
	};
	use std::cell::RefCell;
	use std::rc::Rc;
	use wasm_bindgen::prelude::*;

	/// Id of the element views are mounted into.
	const ROOT_ID: &str = "app";

	/// Starts the application against the browser and listens for
	/// back/forward transitions and in-app link clicks for the lifetime of
	/// the page.
	pub fn launch_in_browser(
		settings: &Settings,
		root_id: &str,
	) -> Result<Rc<RefCell<Router>>, LaunchError> {
		let router = launch(
			settings,
			BrowserHistory,
			BrowserDocument::new()?,
			BrowserOutlet::new(root_id)?,
		)?;
		let router = Rc::new(RefCell::new(router));

		listen_host_transitions(Rc::clone(&router))?.forget();
		listen_link_clicks(Rc::clone(&router))?.forget();
		Ok(router)
	}

	#[wasm_bindgen(start)]
	pub fn start() -> Result<(), JsValue> {
		let mut settings = Settings::default();
		if let Some(base_url) = option_env!("GINFINITY_BASE_URL") {
			settings.base_url = base_url.to_string();
		}

		launch_in_browser(&settings, ROOT_ID)
			.map(|_| ())
			.map_err(|e| JsValue::from_str(&e.to_string()))
	}
}

#[cfg(target_arch = "wasm32")]
pub use browser::launch_in_browser;
