//! PostgreSQL implementation of the component repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Component, NewComponent, RecordId};
use crate::domain::repositories::ComponentRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ComponentRow {
    id: i64,
    name: String,
    description: String,
}

impl From<ComponentRow> for Component {
    fn from(r: ComponentRow) -> Self {
        Component::new(r.id, r.name, r.description)
    }
}

/// PostgreSQL repository for components.
///
/// Names are not unique at the table level; duplicates are prevented by the
/// service's lookup before insert.
pub struct PgComponentRepository {
    pool: Arc<PgPool>,
}

impl PgComponentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComponentRepository for PgComponentRepository {
    async fn create(&self, new_component: NewComponent) -> Result<Component, AppError> {
        let row = sqlx::query_as::<_, ComponentRow>(
            r#"
            INSERT INTO components (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(new_component.name)
        .bind(new_component.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Component>, AppError> {
        let row = sqlx::query_as::<_, ComponentRow>(
            "SELECT id, name, description FROM components WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Component::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Component>, AppError> {
        let row = sqlx::query_as::<_, ComponentRow>(
            r#"
            SELECT id, name, description
            FROM components
            WHERE name = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Component::from))
    }

    async fn find_many(&self, ids: Vec<RecordId>) -> Result<Vec<Component>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ComponentRow>(
            r#"
            SELECT id, name, description
            FROM components
            WHERE id = ANY($1)
            ORDER BY name, id
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Component::from).collect())
    }

    async fn list(&self) -> Result<Vec<Component>, AppError> {
        let rows = sqlx::query_as::<_, ComponentRow>(
            "SELECT id, name, description FROM components ORDER BY name, id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Component::from).collect())
    }

    async fn update(
        &self,
        id: RecordId,
        component: NewComponent,
    ) -> Result<Option<Component>, AppError> {
        let row = sqlx::query_as::<_, ComponentRow>(
            r#"
            UPDATE components SET
                name        = $2,
                description = $3
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(component.name)
        .bind(component.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Component::from))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM components WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM components")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
