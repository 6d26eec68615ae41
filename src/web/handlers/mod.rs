//! HTML page handlers, one module per resource.

pub mod authors;
pub mod catalog;
pub mod components;
pub mod languages;
pub mod not_found;
pub mod notes;

pub use catalog::{index, root_redirect};
pub use not_found::not_found_handler;
