//! Application settings.

pub use ginfinity_conf::*;
