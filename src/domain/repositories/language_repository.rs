//! Repository trait for languages.

use crate::domain::entities::{Language, NewLanguage, RecordId};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for language records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLanguageRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryLanguageRepository`] - In-memory implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageRepository: Send + Sync {
    async fn create(&self, new_language: NewLanguage) -> Result<Language, AppError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Language>, AppError>;

    /// Finds a language by exact name. Used for the pre-insert duplicate check.
    async fn find_by_name(&self, name: &str) -> Result<Option<Language>, AppError>;

    /// Fetches the languages with the given identifiers, ordered by name.
    ///
    /// Unknown identifiers are skipped.
    async fn find_many(&self, ids: Vec<RecordId>) -> Result<Vec<Language>, AppError>;

    /// Lists all languages ordered by name.
    async fn list(&self) -> Result<Vec<Language>, AppError>;

    async fn update(
        &self,
        id: RecordId,
        language: NewLanguage,
    ) -> Result<Option<Language>, AppError>;

    async fn delete(&self, id: RecordId) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
