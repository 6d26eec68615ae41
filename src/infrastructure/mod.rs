//! Infrastructure layer for persistence.
//!
//! # Modules
//!
//! - [`store`] - The [`Store`] handle owning the active backend
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`memory`] - In-memory repository implementations

pub mod memory;
pub mod persistence;
pub mod store;

pub use store::{Repositories, Store};
