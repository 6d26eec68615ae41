//! Business logic services for the application layer.

pub mod author_service;
pub mod catalog_service;
pub mod component_service;
pub mod language_service;
pub mod note_service;

pub use author_service::AuthorService;
pub use catalog_service::{CatalogService, CatalogSummary, DanglingReferences, IntegrityReport};
pub use component_service::ComponentService;
pub use language_service::LanguageService;
pub use note_service::{NoteDetail, NoteFormChoices, NoteListItem, NoteService};

use crate::domain::entities::Note;

/// A record together with the notes that reference it.
#[derive(Debug, Clone)]
pub struct WithDependents<T> {
    pub record: T,
    pub notes: Vec<Note>,
}

/// Result of a create request subject to a duplicate-name check.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome<T> {
    /// A new record was inserted.
    Created(T),
    /// A record with the same name already existed; nothing was inserted.
    Existing(T),
}

impl<T> CreateOutcome<T> {
    /// The inserted or pre-existing record.
    pub fn record(&self) -> &T {
        match self {
            CreateOutcome::Created(record) | CreateOutcome::Existing(record) => record,
        }
    }
}

/// Result of a delete request subject to a dependent-record check.
#[derive(Debug, Clone)]
pub enum DeleteOutcome<T> {
    /// The record was removed.
    Deleted,
    /// Notes still reference the record; nothing was removed.
    Blocked(WithDependents<T>),
    /// No record has the requested identifier.
    Missing,
}
