//! In-memory store used when no database is configured, and by tests.
//!
//! Data lives for the lifetime of the process. Each resource is held in its
//! own [`collection::Collection`] behind a `RwLock`; no lock is held across
//! an `.await`.

pub mod collection;
mod repositories;

pub use repositories::{
    MemoryAuthorRepository, MemoryComponentRepository, MemoryLanguageRepository,
    MemoryNoteRepository,
};

use std::sync::Arc;

/// The four in-memory repositories, shared by handle.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub authors: Arc<MemoryAuthorRepository>,
    pub languages: Arc<MemoryLanguageRepository>,
    pub components: Arc<MemoryComponentRepository>,
    pub notes: Arc<MemoryNoteRepository>,
}

impl MemoryStore {
    pub fn new() -> Self {
        tracing::debug!("Using in-memory store");
        Self::default()
    }
}
