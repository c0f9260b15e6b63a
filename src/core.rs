//! Page and view types.

pub use ginfinity_core::*;
