//! Client-side router.

mod core;
mod document;
mod error;
mod history;
mod outlet;
mod state;
#[cfg(target_arch = "wasm32")]
mod web;

pub use self::core::{Router, Target};
pub use document::{Document, MemoryDocument};
pub use error::{HistoryError, NavigationError};
pub use history::{BasePath, History, MemoryHistory};
pub use outlet::{MemoryOutlet, Outlet};
pub use state::{NavigationState, RouteStatus};
#[cfg(target_arch = "wasm32")]
pub use web::{
	BrowserDocument, BrowserHistory, BrowserOutlet, listen_host_transitions, listen_link_clicks,
};
