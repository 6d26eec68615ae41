//! PostgreSQL implementation of the language repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Language, NewLanguage, RecordId};
use crate::domain::repositories::LanguageRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct LanguageRow {
    id: i64,
    name: String,
    description: String,
}

impl From<LanguageRow> for Language {
    fn from(r: LanguageRow) -> Self {
        Language::new(r.id, r.name, r.description)
    }
}

/// PostgreSQL repository for languages.
///
/// Names are not unique at the table level; duplicates are prevented by the
/// service's lookup before insert.
pub struct PgLanguageRepository {
    pool: Arc<PgPool>,
}

impl PgLanguageRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LanguageRepository for PgLanguageRepository {
    async fn create(&self, new_language: NewLanguage) -> Result<Language, AppError> {
        let row = sqlx::query_as::<_, LanguageRow>(
            r#"
            INSERT INTO languages (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(new_language.name)
        .bind(new_language.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Language>, AppError> {
        let row = sqlx::query_as::<_, LanguageRow>(
            "SELECT id, name, description FROM languages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Language::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Language>, AppError> {
        let row = sqlx::query_as::<_, LanguageRow>(
            r#"
            SELECT id, name, description
            FROM languages
            WHERE name = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Language::from))
    }

    async fn find_many(&self, ids: Vec<RecordId>) -> Result<Vec<Language>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, LanguageRow>(
            r#"
            SELECT id, name, description
            FROM languages
            WHERE id = ANY($1)
            ORDER BY name, id
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Language::from).collect())
    }

    async fn list(&self) -> Result<Vec<Language>, AppError> {
        let rows = sqlx::query_as::<_, LanguageRow>(
            "SELECT id, name, description FROM languages ORDER BY name, id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Language::from).collect())
    }

    async fn update(
        &self,
        id: RecordId,
        language: NewLanguage,
    ) -> Result<Option<Language>, AppError> {
        let row = sqlx::query_as::<_, LanguageRow>(
            r#"
            UPDATE languages SET
                name        = $2,
                description = $3
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(language.name)
        .bind(language.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Language::from))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM languages")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
