//! Ginfinity Pages - client-side navigation.
//!
//! The [`Router`](router::Router) binds host location changes to lookups in
//! a [`RouteTable`](ginfinity_urls::prelude::RouteTable), mounts the matched
//! view, and keeps the document title in sync with the active route.
//!
//! Host services are reached through small traits so the router runs the
//! same way against the browser (`wasm32`) and the in-memory doubles used in
//! tests:
//!
//! | Trait | In-memory | Browser (`wasm32`) |
//! |-------|-----------|--------------------|
//! | [`History`](router::History) | [`MemoryHistory`](router::MemoryHistory) | `BrowserHistory` |
//! | [`Document`](router::Document) | [`MemoryDocument`](router::MemoryDocument) | `BrowserDocument` |
//! | [`Outlet`](router::Outlet) | [`MemoryOutlet`](router::MemoryOutlet) | `BrowserOutlet` |

pub mod router;

pub use router::{NavigationError, NavigationState, RouteStatus, Router, Target};
