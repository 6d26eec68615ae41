//! Cross-resource catalog service: home page counts and reference integrity.

use crate::domain::entities::{NewNote, Note, RecordId};
use crate::domain::repositories::{
    AuthorRepository, ComponentRepository, LanguageRepository, NoteRepository,
};
use crate::error::AppError;
use std::collections::HashSet;
use std::sync::Arc;

/// Record counts shown on the catalog home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub notes: i64,
    pub authors: i64,
    pub languages: i64,
    pub components: i64,
}

/// A note whose language or component lists name records that do not exist.
#[derive(Debug, Clone)]
pub struct DanglingReferences {
    pub note: Note,
    pub languages: Vec<RecordId>,
    pub components: Vec<RecordId>,
}

/// Notes violating the reference assumptions the store does not enforce.
#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    /// Notes whose author does not exist.
    pub missing_author: Vec<Note>,
    /// Notes referencing missing languages or components.
    pub dangling: Vec<DanglingReferences>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.missing_author.is_empty() && self.dangling.is_empty()
    }
}

/// Service for catalog-wide queries.
pub struct CatalogService {
    notes: Arc<dyn NoteRepository>,
    authors: Arc<dyn AuthorRepository>,
    languages: Arc<dyn LanguageRepository>,
    components: Arc<dyn ComponentRepository>,
}

impl CatalogService {
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

    /// Counts all four resources concurrently.
    pub async fn summary(&self) -> Result<CatalogSummary, AppError> {
        let (notes, authors, languages, components) = tokio::try_join!(
            self.notes.count(),
            self.authors.count(),
            self.languages.count(),
            self.components.count(),
        )?;

        Ok(CatalogSummary {
            notes,
            authors,
            languages,
            components,
        })
    }

    /// Scans every note for references to records that no longer exist.
    pub async fn integrity_report(&self) -> Result<IntegrityReport, AppError> {
        let (notes, authors, languages, components) = tokio::try_join!(
            self.notes.list(),
            self.authors.list(),
            self.languages.list(),
            self.components.list(),
        )?;

        let author_ids: HashSet<RecordId> = authors.iter().map(|a| a.id).collect();
        let language_ids: HashSet<RecordId> = languages.iter().map(|l| l.id).collect();
        let component_ids: HashSet<RecordId> = components.iter().map(|c| c.id).collect();

        let mut report = IntegrityReport::default();

        for note in notes {
            if !author_ids.contains(&note.author) {
                report.missing_author.push(note.clone());
            }

            let languages: Vec<RecordId> = note
                .languages
                .iter()
                .copied()
                .filter(|id| !language_ids.contains(id))
                .collect();
            let components: Vec<RecordId> = note
                .components
                .iter()
                .copied()
                .filter(|id| !component_ids.contains(id))
                .collect();

            if !languages.is_empty() || !components.is_empty() {
                report.dangling.push(DanglingReferences {
                    note,
                    languages,
                    components,
                });
            }
        }

        Ok(report)
    }

    /// Removes dangling language and component identifiers from the notes in
    /// `report`. Notes with a missing author are left untouched.
    ///
    /// Returns the number of notes rewritten.
    pub async fn prune_dangling(&self, report: &IntegrityReport) -> Result<usize, AppError> {
        let mut pruned = 0;

        for entry in &report.dangling {
            let mut fields = NewNote::from(&entry.note);
            fields.languages.retain(|id| !entry.languages.contains(id));
            fields.components.retain(|id| !entry.components.contains(id));

            if self.notes.update(entry.note.id, fields).await?.is_some() {
                pruned += 1;
            }
        }

        tracing::info!(notes = pruned, "Pruned dangling note references");
        Ok(pruned)
    }
}
