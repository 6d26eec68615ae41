//! Language management service.

use crate::application::services::{CreateOutcome, DeleteOutcome, WithDependents};
use crate::domain::entities::{Language, NewLanguage, RecordId};
use crate::domain::repositories::{LanguageRepository, NoteRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for language records.
///
/// - Creation is idempotent on name: an existing language with the same name
///   is returned instead of inserting a duplicate.
/// - Deletion is refused while notes are filed under the language.
pub struct LanguageService {
    languages: Arc<dyn LanguageRepository>,
    notes: Arc<dyn NoteRepository>,
}

impl LanguageService {
    pub fn new(languages: Arc<dyn LanguageRepository>, notes: Arc<dyn NoteRepository>) -> Self {
        Self { languages, notes }
    }

    /// Lists all languages ordered by name.
    pub async fn list_languages(&self) -> Result<Vec<Language>, AppError> {
        self.languages.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the language does not exist.
    pub async fn get_language(&self, id: RecordId) -> Result<Language, AppError> {
        self.languages
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Fetches a language and the notes filed under it concurrently.
    pub async fn language_with_notes(
        &self,
        id: RecordId,
    ) -> Result<Option<WithDependents<Language>>, AppError> {
        let (language, notes) = tokio::try_join!(
            self.languages.find_by_id(id),
            self.notes.find_by_language(id)
        )?;

        Ok(language.map(|record| WithDependents { record, notes }))
    }

    /// Creates a language unless one with the same name exists.
    pub async fn create_language(
        &self,
        new_language: NewLanguage,
    ) -> Result<CreateOutcome<Language>, AppError> {
        if let Some(existing) = self.languages.find_by_name(&new_language.name).await? {
            tracing::debug!(language_id = existing.id, "Language already exists");
            return Ok(CreateOutcome::Existing(existing));
        }

        let language = self.languages.create(new_language).await?;
        tracing::info!(language_id = language.id, "Language created");
        Ok(CreateOutcome::Created(language))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the language does not exist.
    pub async fn update_language(
        &self,
        id: RecordId,
        language: NewLanguage,
    ) -> Result<Language, AppError> {
        self.languages
            .update(id, language)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a language unless notes are still filed under it.
    pub async fn delete_language(
        &self,
        id: RecordId,
    ) -> Result<DeleteOutcome<Language>, AppError> {
        let Some(found) = self.language_with_notes(id).await? else {
            return Ok(DeleteOutcome::Missing);
        };

        if !found.notes.is_empty() {
            return Ok(DeleteOutcome::Blocked(found));
        }

        self.languages.delete(id).await?;
        tracing::info!(language_id = id, "Language deleted");
        Ok(DeleteOutcome::Deleted)
    }
}

fn not_found(id: RecordId) -> AppError {
    AppError::not_found("Language not found.", json!({"id": id}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewNote;
    use crate::domain::repositories::{MockLanguageRepository, MockNoteRepository};

    fn rust(id: RecordId) -> Language {
        Language::new(id, "Rust".to_string(), "Fearless concurrency".to_string())
    }

    fn new_rust() -> NewLanguage {
        NewLanguage {
            name: "Rust".to_string(),
            description: "Fearless concurrency".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_language_success() {
        let mut languages = MockLanguageRepository::new();
        languages
            .expect_find_by_name()
            .withf(|name| name == "Rust")
            .times(1)
            .returning(|_| Ok(None));
        languages
            .expect_create()
            .times(1)
            .returning(|new| Ok(new.into_language(1)));

        let service = LanguageService::new(Arc::new(languages), Arc::new(MockNoteRepository::new()));

        let outcome = service.create_language(new_rust()).await.unwrap();

        assert_eq!(outcome, CreateOutcome::Created(rust(1)));
    }

    #[tokio::test]
    async fn test_create_language_duplicate_returns_existing() {
        let mut languages = MockLanguageRepository::new();
        languages
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(Some(rust(4))));
        languages.expect_create().never();

        let service = LanguageService::new(Arc::new(languages), Arc::new(MockNoteRepository::new()));

        let outcome = service.create_language(new_rust()).await.unwrap();

        assert_eq!(outcome, CreateOutcome::Existing(rust(4)));
        assert_eq!(outcome.record().id, 4);
    }

    #[tokio::test]
    async fn test_delete_language_blocked_by_notes() {
        let mut languages = MockLanguageRepository::new();
        languages
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(rust(id))));
        languages.expect_delete().never();

        let mut notes = MockNoteRepository::new();
        notes.expect_find_by_language().times(1).returning(|id| {
            Ok(vec![
                NewNote {
                    title: "Ownership".to_string(),
                    author: 1,
                    summary: "Moves".to_string(),
                    text: "Values have a single owner".to_string(),
                    languages: vec![id],
                    components: vec![],
                    date_created: None,
                }
                .into_note(3),
            ])
        });

        let service = LanguageService::new(Arc::new(languages), Arc::new(notes));

        let outcome = service.delete_language(2).await.unwrap();

        assert!(matches!(outcome, DeleteOutcome::Blocked(_)));
    }

    #[tokio::test]
    async fn test_delete_language_success() {
        let mut languages = MockLanguageRepository::new();
        languages
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(rust(id))));
        languages.expect_delete().times(1).returning(|_| Ok(true));

        let mut notes = MockNoteRepository::new();
        notes
            .expect_find_by_language()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = LanguageService::new(Arc::new(languages), Arc::new(notes));

        let outcome = service.delete_language(2).await.unwrap();

        assert!(matches!(outcome, DeleteOutcome::Deleted));
    }
}
