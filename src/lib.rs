//! # Ginfinity
//!
//! Navigation shell for the Ginfinity RNA comparison frontend.
//!
//! The crate maps URL paths to views and keeps the document title in sync
//! with the active route. It is a facade over the workspace crates:
//!
//! - [`core`]: page and view types
//! - [`urls`]: the immutable route table and path patterns
//! - [`pages`]: the client-side router and its host abstractions
//! - [`conf`]: application settings
//!
//! [`app`] declares the application's routes and the bootstrap that wires
//! them to a host.
//!
//! ## Quick Example
//!
//! ```
//! use ginfinity::conf::Settings;
//! use ginfinity::pages::router::{Document, MemoryDocument, MemoryHistory, MemoryOutlet};
//!
//! let history = MemoryHistory::new("/comparar-arn");
//! let document = MemoryDocument::new();
//!
//! let mut router = ginfinity::app::launch(
//! 	&Settings::default(),
//! 	history.clone(),
//! 	document.clone(),
//! 	MemoryOutlet::new(),
//! )
//! .unwrap();
//! assert_eq!(document.title(), "Comparar ARN");
//!
//! router.navigate("embedding-arn");
//! assert_eq!(history.location(), "/embedding-arn");
//! assert_eq!(document.title(), "Embedding ARN");
//! ```

pub mod app;
pub mod conf;
pub mod core;
pub mod pages;
pub mod urls;
pub mod views;

pub use app::{LaunchError, launch, launch_with_routes, routes};
pub use ginfinity_conf::{Settings, SettingsError};
pub use ginfinity_core::{Page, View};
pub use ginfinity_pages::{NavigationState, RouteStatus, Router, Target};
pub use ginfinity_urls::prelude::{RouteDefinition, RouteMeta, RouteTable, RouteTableError};
