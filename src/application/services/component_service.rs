//! Component management service.

use crate::application::services::{CreateOutcome, DeleteOutcome, WithDependents};
use crate::domain::entities::{Component, NewComponent, RecordId};
use crate::domain::repositories::{ComponentRepository, NoteRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for component records.
///
/// Same rules as [`crate::application::services::LanguageService`]:
/// idempotent creation on name, deletion refused while notes reference it.
pub struct ComponentService {
    components: Arc<dyn ComponentRepository>,
    notes: Arc<dyn NoteRepository>,
}

impl ComponentService {
    pub fn new(components: Arc<dyn ComponentRepository>, notes: Arc<dyn NoteRepository>) -> Self {
        Self { components, notes }
    }

    pub async fn list_components(&self) -> Result<Vec<Component>, AppError> {
        self.components.list().await
    }

    pub async fn get_component(&self, id: RecordId) -> Result<Component, AppError> {
        self.components
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn component_with_notes(
        &self,
        id: RecordId,
    ) -> Result<Option<WithDependents<Component>>, AppError> {
        let (component, notes) = tokio::try_join!(
            self.components.find_by_id(id),
            self.notes.find_by_component(id)
        )?;

        Ok(component.map(|record| WithDependents { record, notes }))
    }

    pub async fn create_component(
        &self,
        new_component: NewComponent,
    ) -> Result<CreateOutcome<Component>, AppError> {
        if let Some(existing) = self.components.find_by_name(&new_component.name).await? {
            tracing::debug!(component_id = existing.id, "Component already exists");
            return Ok(CreateOutcome::Existing(existing));
        }

        let component = self.components.create(new_component).await?;
        tracing::info!(component_id = component.id, "Component created");
        Ok(CreateOutcome::Created(component))
    }

    pub async fn update_component(
        &self,
        id: RecordId,
        component: NewComponent,
    ) -> Result<Component, AppError> {
        self.components
            .update(id, component)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete_component(
        &self,
        id: RecordId,
    ) -> Result<DeleteOutcome<Component>, AppError> {
        let Some(found) = self.component_with_notes(id).await? else {
            return Ok(DeleteOutcome::Missing);
        };

        if !found.notes.is_empty() {
            return Ok(DeleteOutcome::Blocked(found));
        }

        self.components.delete(id).await?;
        tracing::info!(component_id = id, "Component deleted");
        Ok(DeleteOutcome::Deleted)
    }
}

fn not_found(id: RecordId) -> AppError {
    AppError::not_found("Component not found.", json!({"id": id}))
}
