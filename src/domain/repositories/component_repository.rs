//! Repository trait for components.

use crate::domain::entities::{Component, NewComponent, RecordId};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for component records.
///
/// Mirrors [`crate::domain::repositories::LanguageRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    async fn create(&self, new_component: NewComponent) -> Result<Component, AppError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Component>, AppError>;

    /// Finds a component by exact name. Used for the pre-insert duplicate check.
    async fn find_by_name(&self, name: &str) -> Result<Option<Component>, AppError>;

    /// Fetches the components with the given identifiers, ordered by name.
    ///
    /// Unknown identifiers are skipped.
    async fn find_many(&self, ids: Vec<RecordId>) -> Result<Vec<Component>, AppError>;

    /// Lists all components ordered by name.
    async fn list(&self) -> Result<Vec<Component>, AppError>;

    async fn update(
        &self,
        id: RecordId,
        component: NewComponent,
    ) -> Result<Option<Component>, AppError>;

    async fn delete(&self, id: RecordId) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
