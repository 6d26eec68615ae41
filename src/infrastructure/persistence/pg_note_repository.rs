//! PostgreSQL implementation of the note repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewNote, Note, RecordId};
use crate::domain::repositories::NoteRepository;
use crate::error::AppError;

const NOTE_COLUMNS: &str =
    "id, title, author_id, summary, text, language_ids, component_ids, date_created";

#[derive(FromRow)]
struct NoteRow {
    id: i64,
    title: String,
    author_id: i64,
    summary: String,
    text: String,
    language_ids: Vec<i64>,
    component_ids: Vec<i64>,
    date_created: Option<NaiveDate>,
}

impl From<NoteRow> for Note {
    fn from(r: NoteRow) -> Self {
        Note {
            id: r.id,
            title: r.title,
            author: r.author_id,
            summary: r.summary,
            text: r.text,
            languages: r.language_ids,
            components: r.component_ids,
            date_created: r.date_created,
        }
    }
}

/// PostgreSQL repository for notes.
///
/// `author_id` carries no foreign key: a note may outlive its author.
pub struct PgNoteRepository {
    pool: Arc<PgPool>,
}

impl PgNoteRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, condition: &str, id: RecordId) -> Result<Vec<Note>, AppError> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE {condition} ORDER BY title, id");

        let rows = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn create(&self, new_note: NewNote) -> Result<Note, AppError> {
        let sql = format!(
            r#"
            INSERT INTO notes (title, author_id, summary, text, language_ids, component_ids, date_created)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {NOTE_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(new_note.title)
            .bind(new_note.author)
            .bind(new_note.summary)
            .bind(new_note.text)
            .bind(new_note.languages)
            .bind(new_note.components)
            .bind(new_note.date_created)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Note>, AppError> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1");

        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Note::from))
    }

    async fn list(&self) -> Result<Vec<Note>, AppError> {
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY title, id");

        let rows = sqlx::query_as::<_, NoteRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn update(&self, id: RecordId, note: NewNote) -> Result<Option<Note>, AppError> {
        let sql = format!(
            r#"
            UPDATE notes SET
                title         = $2,
                author_id     = $3,
                summary       = $4,
                text          = $5,
                language_ids  = $6,
                component_ids = $7,
                date_created  = $8
            WHERE id = $1
            RETURNING {NOTE_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(id)
            .bind(note.title)
            .bind(note.author)
            .bind(note.summary)
            .bind(note.text)
            .bind(note.languages)
            .bind(note.components)
            .bind(note.date_created)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Note::from))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notes")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_author(&self, author_id: RecordId) -> Result<Vec<Note>, AppError> {
        self.fetch_where("author_id = $1", author_id).await
    }

    async fn find_by_language(&self, language_id: RecordId) -> Result<Vec<Note>, AppError> {
        self.fetch_where("$1 = ANY(language_ids)", language_id).await
    }

    async fn find_by_component(&self, component_id: RecordId) -> Result<Vec<Note>, AppError> {
        self.fetch_where("$1 = ANY(component_ids)", component_id)
            .await
    }
}
