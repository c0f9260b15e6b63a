//! Browser implementations of the host traits (`wasm32` only).

use super::core::Router;
use super::document::Document;
use super::error::HistoryError;
use super::history::History;
use super::outlet::Outlet;
use ginfinity_core::Page;
use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

fn window() -> Result<web_sys::Window, HistoryError> {
	web_sys::window().ok_or_else(|| HistoryError::Unavailable("no window".to_string()))
}

fn js_error(value: JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{:?}", value))
}

/// `window.history` / `window.location`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHistory;

impl History for BrowserHistory {
	fn current_path(&self) -> Result<String, HistoryError> {
		let location = window()?.location();
		let read = |part: Result<String, JsValue>| {
			part.map_err(|e| HistoryError::Unavailable(js_error(e)))
		};

		let mut path = read(location.pathname())?;
		path.push_str(&read(location.search())?);
		path.push_str(&read(location.hash())?);
		Ok(path)
	}

	fn push_path(&mut self, path: &str) -> Result<(), HistoryError> {
		window()?
			.history()
			.map_err(|e| HistoryError::Unavailable(js_error(e)))?
			.push_state_with_url(&JsValue::NULL, "", Some(path))
			.map_err(|e| HistoryError::Rejected(js_error(e)))
	}

	fn replace_path(&mut self, path: &str) -> Result<(), HistoryError> {
		window()?
			.history()
			.map_err(|e| HistoryError::Unavailable(js_error(e)))?
			.replace_state_with_url(&JsValue::NULL, "", Some(path))
			.map_err(|e| HistoryError::Rejected(js_error(e)))
	}
}

/// `window.document`.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
	document: web_sys::Document,
}

impl BrowserDocument {
	/// Binds to the window's document.
	pub fn new() -> Result<Self, HistoryError> {
		let document = window()?
			.document()
			.ok_or_else(|| HistoryError::Unavailable("no document".to_string()))?;
		Ok(Self { document })
	}
}

impl Document for BrowserDocument {
	fn title(&self) -> String {
		self.document.title()
	}

	fn set_title(&mut self, title: &str) {
		self.document.set_title(title);
	}
}

/// Renders pages into the element with a given id.
#[derive(Debug, Clone)]
pub struct BrowserOutlet {
	root: web_sys::Element,
}

impl BrowserOutlet {
	/// Binds to the element with `id`.
	pub fn new(id: &str) -> Result<Self, HistoryError> {
		let root = BrowserDocument::new()?
			.document
			.get_element_by_id(id)
			.ok_or_else(|| HistoryError::Unavailable(format!("no element #{}", id)))?;
		Ok(Self { root })
	}
}

impl Outlet for BrowserOutlet {
	fn mount(&mut self, page: Page) {
		self.root.set_inner_html(&page.render_to_string());
	}
}

/// Routes `popstate` events to [`Router::on_host_transition`].
///
/// The returned closure must stay alive for as long as the listener should
/// fire; callers usually `forget()` it for the lifetime of the page.
pub fn listen_host_transitions(
	router: Rc<RefCell<Router>>,
) -> Result<Closure<dyn FnMut(web_sys::PopStateEvent)>, HistoryError> {
	let closure = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(
		move |_event: web_sys::PopStateEvent| {
			router.borrow_mut().on_host_transition();
		},
	);

	window()?
		.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
		.map_err(|e| HistoryError::Unavailable(js_error(e)))?;

	Ok(closure)
}

/// Routes clicks on `a[data-link]` elements through [`Router::navigate`].
///
/// Modified clicks (ctrl, meta, shift, middle button) and links outside the
/// base URL are left to the browser. Like [`listen_host_transitions`], the
/// returned closure must be kept alive.
pub fn listen_link_clicks(
	router: Rc<RefCell<Router>>,
) -> Result<Closure<dyn FnMut(web_sys::Event)>, HistoryError> {
	let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
		if event.default_prevented() || is_modified_click(&event) {
			return;
		}
		let Some(href) = link_href(&event) else {
			return;
		};

		let mut router = router.borrow_mut();
		let Some(path) = router.base().strip(&href).map(Cow::into_owned) else {
			return;
		};
		event.prevent_default();
		router.navigate(path);
	});

	BrowserDocument::new()?
		.document
		.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
		.map_err(|e| HistoryError::Unavailable(js_error(e)))?;

	Ok(closure)
}

fn is_modified_click(event: &web_sys::Event) -> bool {
	event
		.dyn_ref::<web_sys::MouseEvent>()
		.is_some_and(|e| {
			e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key()
		})
}

fn link_href(event: &web_sys::Event) -> Option<String> {
	let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
	let link = target.closest("a[data-link]").ok()??;
	link.get_attribute("href")
}
