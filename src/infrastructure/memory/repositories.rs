//! In-memory implementations of the domain repository traits.

use async_trait::async_trait;

use super::collection::Collection;
use crate::domain::entities::{
    Author, Component, Language, NewAuthor, NewComponent, NewLanguage, NewNote, Note, RecordId,
};
use crate::domain::repositories::{
    AuthorRepository, ComponentRepository, LanguageRepository, NoteRepository,
};
use crate::error::AppError;

/// In-memory author repository.
pub struct MemoryAuthorRepository {
    rows: Collection<Author>,
}

impl MemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            rows: Collection::new("authors"),
        }
    }
}

impl Default for MemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        self.rows.insert_with(|id| new_author.into_author(id))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Author>, AppError> {
        self.rows.get(id)
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        let mut authors = self.rows.filter(|_| true)?;
        authors.sort_by(|a, b| a.family_name.cmp(&b.family_name));
        Ok(authors)
    }

    async fn update(&self, id: RecordId, author: NewAuthor) -> Result<Option<Author>, AppError> {
        self.rows.replace(id, author.into_author(id))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, AppError> {
        self.rows.remove(id)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.rows.len()
    }
}

/// In-memory language repository.
pub struct MemoryLanguageRepository {
    rows: Collection<Language>,
}

impl MemoryLanguageRepository {
    pub fn new() -> Self {
        Self {
            rows: Collection::new("languages"),
        }
    }
}

impl Default for MemoryLanguageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageRepository for MemoryLanguageRepository {
    async fn create(&self, new_language: NewLanguage) -> Result<Language, AppError> {
        self.rows.insert_with(|id| new_language.into_language(id))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Language>, AppError> {
        self.rows.get(id)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Language>, AppError> {
        Ok(self.rows.filter(|l| l.name == name)?.into_iter().next())
    }

    async fn find_many(&self, ids: Vec<RecordId>) -> Result<Vec<Language>, AppError> {
        let mut languages = self.rows.filter(|l| ids.contains(&l.id))?;
        languages.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(languages)
    }

    async fn list(&self) -> Result<Vec<Language>, AppError> {
        let mut languages = self.rows.filter(|_| true)?;
        languages.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(languages)
    }

    async fn update(
        &self,
        id: RecordId,
        language: NewLanguage,
    ) -> Result<Option<Language>, AppError> {
        self.rows.replace(id, language.into_language(id))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, AppError> {
        self.rows.remove(id)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.rows.len()
    }
}

/// In-memory component repository.
pub struct MemoryComponentRepository {
    rows: Collection<Component>,
}

impl MemoryComponentRepository {
    pub fn new() -> Self {
        Self {
            rows: Collection::new("components"),
        }
    }
}

impl Default for MemoryComponentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComponentRepository for MemoryComponentRepository {
    async fn create(&self, new_component: NewComponent) -> Result<Component, AppError> {
        self.rows.insert_with(|id| new_component.into_component(id))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Component>, AppError> {
        self.rows.get(id)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Component>, AppError> {
        Ok(self.rows.filter(|c| c.name == name)?.into_iter().next())
    }

    async fn find_many(&self, ids: Vec<RecordId>) -> Result<Vec<Component>, AppError> {
        let mut components = self.rows.filter(|c| ids.contains(&c.id))?;
        components.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(components)
    }

    async fn list(&self) -> Result<Vec<Component>, AppError> {
        let mut components = self.rows.filter(|_| true)?;
        components.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(components)
    }

    async fn update(
        &self,
        id: RecordId,
        component: NewComponent,
    ) -> Result<Option<Component>, AppError> {
        self.rows.replace(id, component.into_component(id))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, AppError> {
        self.rows.remove(id)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.rows.len()
    }
}

/// In-memory note repository.
pub struct MemoryNoteRepository {
    rows: Collection<Note>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self {
            rows: Collection::new("notes"),
        }
    }

    fn sorted(mut notes: Vec<Note>) -> Vec<Note> {
        notes.sort_by(|a, b| a.title.cmp(&b.title));
        notes
    }
}

impl Default for MemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn create(&self, new_note: NewNote) -> Result<Note, AppError> {
        self.rows.insert_with(|id| new_note.into_note(id))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Note>, AppError> {
        self.rows.get(id)
    }

    async fn list(&self) -> Result<Vec<Note>, AppError> {
        Ok(Self::sorted(self.rows.filter(|_| true)?))
    }

    async fn update(&self, id: RecordId, note: NewNote) -> Result<Option<Note>, AppError> {
        self.rows.replace(id, note.into_note(id))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, AppError> {
        self.rows.remove(id)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.rows.len()
    }

    async fn find_by_author(&self, author_id: RecordId) -> Result<Vec<Note>, AppError> {
        Ok(Self::sorted(self.rows.filter(|n| n.author == author_id)?))
    }

    async fn find_by_language(&self, language_id: RecordId) -> Result<Vec<Note>, AppError> {
        Ok(Self::sorted(
            self.rows.filter(|n| n.references_language(language_id))?,
        ))
    }

    async fn find_by_component(&self, component_id: RecordId) -> Result<Vec<Note>, AppError> {
        Ok(Self::sorted(
            self.rows.filter(|n| n.references_component(component_id))?,
        ))
    }
}
