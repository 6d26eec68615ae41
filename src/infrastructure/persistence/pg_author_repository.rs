//! PostgreSQL implementation of the author repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Author, NewAuthor, RecordId};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct AuthorRow {
    id: i64,
    first_name: String,
    family_name: String,
    date_joined: Option<NaiveDate>,
}

impl From<AuthorRow> for Author {
    fn from(r: AuthorRow) -> Self {
        Author::new(r.id, r.first_name, r.family_name, r.date_joined)
    }
}

/// PostgreSQL repository for authors.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO authors (first_name, family_name, date_joined)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, family_name, date_joined
            "#,
        )
        .bind(new_author.first_name)
        .bind(new_author.family_name)
        .bind(new_author.date_joined)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, first_name, family_name, date_joined
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, first_name, family_name, date_joined
            FROM authors
            ORDER BY family_name, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn update(&self, id: RecordId, author: NewAuthor) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            UPDATE authors SET
                first_name  = $2,
                family_name = $3,
                date_joined = $4
            WHERE id = $1
            RETURNING id, first_name, family_name, date_joined
            "#,
        )
        .bind(id)
        .bind(author.first_name)
        .bind(author.family_name)
        .bind(author.date_joined)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM authors")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
