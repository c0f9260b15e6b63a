//! URL routing for Ginfinity.
//!
//! This crate owns the application's route table: an ordered, immutable list
//! of [`RouteDefinition`]s validated once at construction. Lookups are pure
//! and side-effect free; navigation state lives in `ginfinity-pages`.
//!
//! ```
//! use ginfinity_core::{Page, View};
//! use ginfinity_urls::prelude::*;
//!
//! let table = RouteTable::builder()
//! 	.route("/", "home", View::new("HomeView", || Page::text("Home")), RouteMeta::titled("Home"))
//! 	.route("/compare", "compare", View::new("CompareView", Page::empty), RouteMeta::titled("Compare"))
//! 	.build()
//! 	.unwrap();
//!
//! let matched = table.lookup("/compare").unwrap();
//! assert_eq!(matched.route.name(), "compare");
//! assert!(table.lookup("/missing").is_none());
//! ```

pub mod routers;

/// Commonly used routing types.
pub mod prelude {
	pub use crate::routers::client_router::{
		ClientPathPattern, PatternError, ReverseError, RouteDefinition, RouteMatch, RouteMeta,
		RouteTable, RouteTableBuilder, RouteTableError,
	};
}
