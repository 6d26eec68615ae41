//! Repository trait for authors.

use crate::domain::entities::{Author, NewAuthor, RecordId};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for author records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryAuthorRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Inserts a new author and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by identifier.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Author>, AppError>;

    /// Lists all authors ordered by family name.
    async fn list(&self) -> Result<Vec<Author>, AppError>;

    /// Replaces all fields of an existing author, keeping its identifier.
    ///
    /// Returns `None` when no author has the given identifier.
    async fn update(&self, id: RecordId, author: NewAuthor) -> Result<Option<Author>, AppError>;

    /// Deletes an author. Returns `false` when nothing was deleted.
    async fn delete(&self, id: RecordId) -> Result<bool, AppError>;

    /// Counts stored authors.
    async fn count(&self) -> Result<i64, AppError>;
}
