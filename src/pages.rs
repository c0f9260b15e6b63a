//! Client-side router.
//!
//! Re-exports `ginfinity-pages`: the [`Router`](router::Router), the
//! navigation state it owns, and the history/document/outlet traits it
//! drives.

pub use ginfinity_pages::*;
