//! Repository trait for notes.

use crate::domain::entities::{NewNote, Note, RecordId};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for note records.
///
/// Besides CRUD, exposes the reverse lookups used to find the dependent notes
/// of an author, language or component.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgNoteRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryNoteRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(&self, new_note: NewNote) -> Result<Note, AppError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Note>, AppError>;

    /// Lists all notes ordered by title.
    async fn list(&self) -> Result<Vec<Note>, AppError>;

    /// Replaces all fields of an existing note, keeping its identifier.
    async fn update(&self, id: RecordId, note: NewNote) -> Result<Option<Note>, AppError>;

    async fn delete(&self, id: RecordId) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Notes written by the given author, ordered by title.
    async fn find_by_author(&self, author_id: RecordId) -> Result<Vec<Note>, AppError>;

    /// Notes filed under the given language, ordered by title.
    async fn find_by_language(&self, language_id: RecordId) -> Result<Vec<Note>, AppError>;

    /// Notes filed under the given component, ordered by title.
    async fn find_by_component(&self, component_id: RecordId) -> Result<Vec<Note>, AppError>;
}
