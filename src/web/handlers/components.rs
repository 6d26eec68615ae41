//! Component pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::application::services::DeleteOutcome;
use crate::domain::entities::{Component, Note};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_record_id;
use crate::web::extract::HtmlForm;
use crate::web::forms::{ComponentForm, FieldError, Invalid};

const LIST_URL: &str = "/catalog/components";

#[derive(Template, WebTemplate)]
#[template(path = "component_list.html")]
pub struct ComponentListTemplate {
    pub title: String,
    pub components: Vec<Component>,
}

#[derive(Template, WebTemplate)]
#[template(path = "component_detail.html")]
pub struct ComponentDetailTemplate {
    pub title: String,
    pub component: Component,
    pub notes: Vec<Note>,
}

#[derive(Template, WebTemplate)]
#[template(path = "component_form.html")]
pub struct ComponentFormTemplate {
    pub title: String,
    pub form: ComponentForm,
    pub errors: Vec<FieldError>,
}

#[derive(Template, WebTemplate)]
#[template(path = "component_delete.html")]
pub struct ComponentDeleteTemplate {
    pub title: String,
    pub component: Component,
    pub notes: Vec<Note>,
}

/// `GET /catalog/components`
pub async fn component_list(State(state): State<AppState>) -> Result<Response, AppError> {
    let components = state.component_service.list_components().await?;

    Ok(ComponentListTemplate {
        title: "Component List".to_string(),
        components,
    }
    .into_response())
}

/// `GET /catalog/component/{id}`
pub async fn component_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Component")?;

    let found = state
        .component_service
        .component_with_notes(id)
        .await?
        .ok_or_else(|| AppError::not_found("Component not found.", json!({ "id": id })))?;

    Ok(ComponentDetailTemplate {
        title: "Component Detail".to_string(),
        component: found.record,
        notes: found.notes,
    }
    .into_response())
}

/// `GET /catalog/component/create`
pub async fn component_create_get() -> impl IntoResponse {
    ComponentFormTemplate {
        title: "Create Component".to_string(),
        form: ComponentForm::default(),
        errors: Vec::new(),
    }
}

/// `POST /catalog/component/create`
///
/// A name that is already taken redirects to the existing component.
pub async fn component_create_post(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<ComponentForm>,
) -> Result<Response, AppError> {
    let new_component = match form.parse() {
        Ok(new_component) => new_component,
        Err(Invalid { form, errors }) => {
            return Ok(ComponentFormTemplate {
                title: "Create Component".to_string(),
                form,
                errors,
            }
            .into_response());
        }
    };

    let outcome = state.component_service.create_component(new_component).await?;
    Ok(Redirect::to(&outcome.record().url()).into_response())
}

/// `GET /catalog/component/{id}/delete`
pub async fn component_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = parse_record_id(&id, "Component") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };

    match state.component_service.component_with_notes(id).await? {
        Some(found) => Ok(ComponentDeleteTemplate {
            title: "Delete Component".to_string(),
            component: found.record,
            notes: found.notes,
        }
        .into_response()),
        None => Ok(Redirect::to(LIST_URL).into_response()),
    }
}

/// `POST /catalog/component/{id}/delete`
pub async fn component_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = parse_record_id(&id, "Component") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };

    match state.component_service.delete_component(id).await? {
        DeleteOutcome::Blocked(found) => Ok(ComponentDeleteTemplate {
            title: "Delete Component".to_string(),
            component: found.record,
            notes: found.notes,
        }
        .into_response()),
        DeleteOutcome::Deleted | DeleteOutcome::Missing => {
            Ok(Redirect::to(LIST_URL).into_response())
        }
    }
}

/// `GET /catalog/component/{id}/update`
pub async fn component_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Component")?;
    let component = state.component_service.get_component(id).await?;

    Ok(ComponentFormTemplate {
        title: "Update Component".to_string(),
        form: ComponentForm::from_component(&component),
        errors: Vec::new(),
    }
    .into_response())
}

/// `POST /catalog/component/{id}/update`
pub async fn component_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    HtmlForm(form): HtmlForm<ComponentForm>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Component")?;

    let component = match form.parse() {
        Ok(component) => component,
        Err(Invalid { form, errors }) => {
            state.component_service.get_component(id).await?;
            return Ok(ComponentFormTemplate {
                title: "Update Component".to_string(),
                form,
                errors,
            }
            .into_response());
        }
    };

    let component = state.component_service.update_component(id, component).await?;
    Ok(Redirect::to(&component.url()).into_response())
}
