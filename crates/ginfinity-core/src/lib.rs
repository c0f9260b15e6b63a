//! Ginfinity Core - shared page and view types.
//!
//! The navigation crates never construct view state themselves. They hold
//! [`View`] handles declared by the presentation layer and mount the
//! [`Page`] a view produces.

pub mod page;
pub mod view;

pub use page::{IntoPage, Page, PageElement};
pub use view::View;
