//! Shared application state injected into every handler.

use crate::application::services::{
    AuthorService, CatalogService, ComponentService, LanguageService, NoteService,
};
use crate::infrastructure::Store;
use std::sync::Arc;

/// Services plus the store handle they were built from.
///
/// Cloned per request; all fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<AuthorService>,
    pub language_service: Arc<LanguageService>,
    pub component_service: Arc<ComponentService>,
    pub note_service: Arc<NoteService>,
    pub catalog_service: Arc<CatalogService>,
    pub store: Store,
    /// Whether error pages include internal details (development only).
    pub show_error_details: bool,
}

impl AppState {
    /// Builds every service on top of `store`'s repositories.
    pub fn new(store: Store, show_error_details: bool) -> Self {
        let repos = store.repositories().clone();

        Self {
            author_service: Arc::new(AuthorService::new(
                repos.authors.clone(),
                repos.notes.clone(),
            )),
            language_service: Arc::new(LanguageService::new(
                repos.languages.clone(),
                repos.notes.clone(),
            )),
            component_service: Arc::new(ComponentService::new(
                repos.components.clone(),
                repos.notes.clone(),
            )),
            note_service: Arc::new(NoteService::new(
                repos.notes.clone(),
                repos.authors.clone(),
                repos.languages.clone(),
                repos.components.clone(),
            )),
            catalog_service: Arc::new(CatalogService::new(
                repos.notes,
                repos.authors,
                repos.languages,
                repos.components,
            )),
            store,
            show_error_details,
        }
    }
}
