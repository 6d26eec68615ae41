//! Author management service.

use crate::application::services::{DeleteOutcome, WithDependents};
use crate::domain::entities::{Author, NewAuthor, RecordId};
use crate::domain::repositories::{AuthorRepository, NoteRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for author records.
///
/// An author may only be deleted once no note names it as its author.
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
    notes: Arc<dyn NoteRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>, notes: Arc<dyn NoteRepository>) -> Self {
        Self { authors, notes }
    }

    /// Lists all authors ordered by family name.
    pub async fn list_authors(&self) -> Result<Vec<Author>, AppError> {
        self.authors.list().await
    }

    /// Retrieves an author by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    pub async fn get_author(&self, id: RecordId) -> Result<Author, AppError> {
        self.authors
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Fetches an author and their notes concurrently.
    ///
    /// Returns `None` when the author does not exist.
    pub async fn author_with_notes(
        &self,
        id: RecordId,
    ) -> Result<Option<WithDependents<Author>>, AppError> {
        let (author, notes) =
            tokio::try_join!(self.authors.find_by_id(id), self.notes.find_by_author(id))?;

        Ok(author.map(|record| WithDependents { record, notes }))
    }

    pub async fn create_author(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let author = self.authors.create(new_author).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    /// Replaces an author's fields, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    pub async fn update_author(&self, id: RecordId, author: NewAuthor) -> Result<Author, AppError> {
        self.authors
            .update(id, author)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an author unless notes still reference them.
    pub async fn delete_author(&self, id: RecordId) -> Result<DeleteOutcome<Author>, AppError> {
        let Some(found) = self.author_with_notes(id).await? else {
            return Ok(DeleteOutcome::Missing);
        };

        if !found.notes.is_empty() {
            tracing::info!(
                author_id = id,
                notes = found.notes.len(),
                "Author delete blocked by dependent notes"
            );
            return Ok(DeleteOutcome::Blocked(found));
        }

        self.authors.delete(id).await?;
        tracing::info!(author_id = id, "Author deleted");
        Ok(DeleteOutcome::Deleted)
    }
}

fn not_found(id: RecordId) -> AppError {
    AppError::not_found("Author not found.", json!({"id": id}))
}
