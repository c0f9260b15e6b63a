//! Route table and path patterns.

pub use ginfinity_urls::*;
