//! Note management service.
//!
//! Notes store only identifiers for their author, languages and components.
//! Every page that shows those records resolves them here with explicit
//! fetches, running independent reads concurrently.

use crate::domain::entities::{Author, Component, Language, NewNote, Note, RecordId};
use crate::domain::repositories::{
    AuthorRepository, ComponentRepository, LanguageRepository, NoteRepository,
};
use crate::error::AppError;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// A note row in the note list, with its author resolved.
#[derive(Debug, Clone)]
pub struct NoteListItem {
    pub note: Note,
    pub author: Option<Author>,
}

/// A note with all references resolved.
///
/// `author` is `None` when the referenced author no longer exists; unknown
/// language and component identifiers are skipped.
#[derive(Debug, Clone)]
pub struct NoteDetail {
    pub note: Note,
    pub author: Option<Author>,
    pub languages: Vec<Language>,
    pub components: Vec<Component>,
}

/// Candidate records offered by the note form.
#[derive(Debug, Clone, Default)]
pub struct NoteFormChoices {
    pub authors: Vec<Author>,
    pub languages: Vec<Language>,
    pub components: Vec<Component>,
}

/// Service for note records.
pub struct NoteService {
    notes: Arc<dyn NoteRepository>,
    authors: Arc<dyn AuthorRepository>,
    languages: Arc<dyn LanguageRepository>,
    components: Arc<dyn ComponentRepository>,
}

impl NoteService {
    pub fn new(
        notes: Arc<dyn NoteRepository>,
        authors: Arc<dyn AuthorRepository>,
        languages: Arc<dyn LanguageRepository>,
        components: Arc<dyn ComponentRepository>,
    ) -> Self {
        Self {
            notes,
            authors,
            languages,
            components,
        }
    }

    /// Lists notes ordered by title, each joined with its author.
    pub async fn list_notes(&self) -> Result<Vec<NoteListItem>, AppError> {
        let (notes, authors) = tokio::try_join!(self.notes.list(), self.authors.list())?;

        let by_id: HashMap<RecordId, Author> =
            authors.into_iter().map(|a| (a.id, a)).collect();

        Ok(notes
            .into_iter()
            .map(|note| {
                let author = by_id.get(&note.author).cloned();
                NoteListItem { note, author }
            })
            .collect())
    }

    /// Retrieves a note by identifier without resolving references.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the note does not exist.
    pub async fn get_note(&self, id: RecordId) -> Result<Note, AppError> {
        self.notes
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Fetches a note and resolves its author, languages and components.
    ///
    /// Returns `None` when the note does not exist.
    pub async fn note_detail(&self, id: RecordId) -> Result<Option<NoteDetail>, AppError> {
        let Some(note) = self.notes.find_by_id(id).await? else {
            return Ok(None);
        };

        let (author, languages, components) = tokio::try_join!(
            self.authors.find_by_id(note.author),
            self.languages.find_many(note.languages.clone()),
            self.components.find_many(note.components.clone()),
        )?;

        Ok(Some(NoteDetail {
            note,
            author,
            languages,
            components,
        }))
    }

    /// Loads every author, language and component for the note form.
    pub async fn form_choices(&self) -> Result<NoteFormChoices, AppError> {
        let (authors, languages, components) = tokio::try_join!(
            self.authors.list(),
            self.languages.list(),
            self.components.list(),
        )?;

        Ok(NoteFormChoices {
            authors,
            languages,
            components,
        })
    }

    /// Fetches a note together with the form choices, for the update form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the note does not exist.
    pub async fn note_with_choices(
        &self,
        id: RecordId,
    ) -> Result<(Note, NoteFormChoices), AppError> {
        let (note, choices) = tokio::try_join!(self.get_note(id), self.form_choices())?;
        Ok((note, choices))
    }

    pub async fn create_note(&self, new_note: NewNote) -> Result<Note, AppError> {
        let note = self.notes.create(new_note).await?;
        tracing::info!(note_id = note.id, author_id = note.author, "Note created");
        Ok(note)
    }

    /// Replaces a note's fields, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the note does not exist.
    pub async fn update_note(&self, id: RecordId, note: NewNote) -> Result<Note, AppError> {
        let updated = self
            .notes
            .update(id, note)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(note_id = id, "Note updated");
        Ok(updated)
    }

    /// Deletes a note. Nothing references notes, so no dependency check applies.
    ///
    /// Returns `false` when the note did not exist.
    pub async fn delete_note(&self, id: RecordId) -> Result<bool, AppError> {
        let deleted = self.notes.delete(id).await?;
        if deleted {
            tracing::info!(note_id = id, "Note deleted");
        }
        Ok(deleted)
    }
}

fn not_found(id: RecordId) -> AppError {
    AppError::not_found("Note not found.", json!({"id": id}))
}
