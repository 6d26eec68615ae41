//! Middleware wrapped around the router.

pub mod error_page;
pub mod tracing;
