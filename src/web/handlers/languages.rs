//! Language pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::application::services::DeleteOutcome;
use crate::domain::entities::{Language, Note};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_record_id;
use crate::web::extract::HtmlForm;
use crate::web::forms::{FieldError, Invalid, LanguageForm};

const LIST_URL: &str = "/catalog/languages";

#[derive(Template, WebTemplate)]
#[template(path = "language_list.html")]
pub struct LanguageListTemplate {
    pub title: String,
    pub languages: Vec<Language>,
}

#[derive(Template, WebTemplate)]
#[template(path = "language_detail.html")]
pub struct LanguageDetailTemplate {
    pub title: String,
    pub language: Language,
    pub notes: Vec<Note>,
}

#[derive(Template, WebTemplate)]
#[template(path = "language_form.html")]
pub struct LanguageFormTemplate {
    pub title: String,
    pub form: LanguageForm,
    pub errors: Vec<FieldError>,
}

#[derive(Template, WebTemplate)]
#[template(path = "language_delete.html")]
pub struct LanguageDeleteTemplate {
    pub title: String,
    pub language: Language,
    pub notes: Vec<Note>,
}

/// `GET /catalog/languages`
pub async fn language_list(State(state): State<AppState>) -> Result<Response, AppError> {
    let languages = state.language_service.list_languages().await?;

    Ok(LanguageListTemplate {
        title: "Language List".to_string(),
        languages,
    }
    .into_response())
}

/// `GET /catalog/language/{id}`
pub async fn language_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Language")?;

    let found = state
        .language_service
        .language_with_notes(id)
        .await?
        .ok_or_else(|| AppError::not_found("Language not found.", json!({ "id": id })))?;

    Ok(LanguageDetailTemplate {
        title: "Language Detail".to_string(),
        language: found.record,
        notes: found.notes,
    }
    .into_response())
}

/// `GET /catalog/language/create`
pub async fn language_create_get() -> impl IntoResponse {
    LanguageFormTemplate {
        title: "Create Language".to_string(),
        form: LanguageForm::default(),
        errors: Vec::new(),
    }
}

/// `POST /catalog/language/create`
///
/// A name that is already taken redirects to the existing language.
pub async fn language_create_post(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<LanguageForm>,
) -> Result<Response, AppError> {
    let new_language = match form.parse() {
        Ok(new_language) => new_language,
        Err(Invalid { form, errors }) => {
            return Ok(LanguageFormTemplate {
                title: "Create Language".to_string(),
                form,
                errors,
            }
            .into_response());
        }
    };

    let outcome = state.language_service.create_language(new_language).await?;
    Ok(Redirect::to(&outcome.record().url()).into_response())
}

/// `GET /catalog/language/{id}/delete`
pub async fn language_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = parse_record_id(&id, "Language") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };

    match state.language_service.language_with_notes(id).await? {
        Some(found) => Ok(LanguageDeleteTemplate {
            title: "Delete Language".to_string(),
            language: found.record,
            notes: found.notes,
        }
        .into_response()),
        None => Ok(Redirect::to(LIST_URL).into_response()),
    }
}

/// `POST /catalog/language/{id}/delete`
pub async fn language_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = parse_record_id(&id, "Language") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };

    match state.language_service.delete_language(id).await? {
        DeleteOutcome::Blocked(found) => Ok(LanguageDeleteTemplate {
            title: "Delete Language".to_string(),
            language: found.record,
            notes: found.notes,
        }
        .into_response()),
        DeleteOutcome::Deleted | DeleteOutcome::Missing => {
            Ok(Redirect::to(LIST_URL).into_response())
        }
    }
}

/// `GET /catalog/language/{id}/update`
pub async fn language_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Language")?;
    let language = state.language_service.get_language(id).await?;

    Ok(LanguageFormTemplate {
        title: "Update Language".to_string(),
        form: LanguageForm::from_language(&language),
        errors: Vec::new(),
    }
    .into_response())
}

/// `POST /catalog/language/{id}/update`
pub async fn language_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    HtmlForm(form): HtmlForm<LanguageForm>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Language")?;

    let language = match form.parse() {
        Ok(language) => language,
        Err(Invalid { form, errors }) => {
            state.language_service.get_language(id).await?;
            return Ok(LanguageFormTemplate {
                title: "Update Language".to_string(),
                form,
                errors,
            }
            .into_response());
        }
    };

    let language = state.language_service.update_language(id, language).await?;
    Ok(Redirect::to(&language.url()).into_response())
}
