//! Client-side route table.
//!
//! - [`pattern`]: Django-style path patterns (`/runs/{id}`, `/files/{path:*}`)
//! - [`route`]: route definitions and their typed metadata
//! - [`table`]: the validated, ordered route table and its lookups
//! - [`error`]: construction and reverse-lookup errors

pub mod error;
pub mod pattern;
pub mod route;
pub mod table;

pub use error::{PatternError, ReverseError, RouteTableError};
pub use pattern::ClientPathPattern;
pub use route::{RouteDefinition, RouteMeta};
pub use table::{RouteMatch, RouteTable, RouteTableBuilder};
