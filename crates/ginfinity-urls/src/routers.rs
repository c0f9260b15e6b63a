//! Routers.

pub mod client_router;
