//! Author pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::application::services::DeleteOutcome;
use crate::domain::entities::{Author, Note};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_record_id;
use crate::web::extract::HtmlForm;
use crate::web::forms::{AuthorForm, FieldError, Invalid};

const LIST_URL: &str = "/catalog/authors";

#[derive(Template, WebTemplate)]
#[template(path = "author_list.html")]
pub struct AuthorListTemplate {
    pub title: String,
    pub authors: Vec<Author>,
}

#[derive(Template, WebTemplate)]
#[template(path = "author_detail.html")]
pub struct AuthorDetailTemplate {
    pub title: String,
    pub author: Author,
    pub notes: Vec<Note>,
}

/// Create and update share this form; `errors` is empty on first display.
#[derive(Template, WebTemplate)]
#[template(path = "author_form.html")]
pub struct AuthorFormTemplate {
    pub title: String,
    pub form: AuthorForm,
    pub errors: Vec<FieldError>,
}

#[derive(Template, WebTemplate)]
#[template(path = "author_delete.html")]
pub struct AuthorDeleteTemplate {
    pub title: String,
    pub author: Author,
    pub notes: Vec<Note>,
}

impl AuthorFormTemplate {
    fn create(form: AuthorForm, errors: Vec<FieldError>) -> Self {
        Self {
            title: "Create Author".to_string(),
            form,
            errors,
        }
    }

    fn update(form: AuthorForm, errors: Vec<FieldError>) -> Self {
        Self {
            title: "Update Author".to_string(),
            form,
            errors,
        }
    }
}

/// `GET /catalog/authors`
pub async fn author_list(State(state): State<AppState>) -> Result<Response, AppError> {
    let authors = state.author_service.list_authors().await?;

    Ok(AuthorListTemplate {
        title: "Author List".to_string(),
        authors,
    }
    .into_response())
}

/// `GET /catalog/author/{id}`
pub async fn author_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Author")?;

    let found = state
        .author_service
        .author_with_notes(id)
        .await?
        .ok_or_else(|| AppError::not_found("Author not found.", json!({ "id": id })))?;

    Ok(AuthorDetailTemplate {
        title: "Author Detail".to_string(),
        author: found.record,
        notes: found.notes,
    }
    .into_response())
}

/// `GET /catalog/author/create`
pub async fn author_create_get() -> impl IntoResponse {
    AuthorFormTemplate::create(AuthorForm::default(), Vec::new())
}

/// `POST /catalog/author/create`
pub async fn author_create_post(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<AuthorForm>,
) -> Result<Response, AppError> {
    let new_author = match form.parse() {
        Ok(new_author) => new_author,
        Err(Invalid { form, errors }) => {
            return Ok(AuthorFormTemplate::create(form, errors).into_response());
        }
    };

    let author = state.author_service.create_author(new_author).await?;
    Ok(Redirect::to(&author.url()).into_response())
}

/// `GET /catalog/author/{id}/delete`
///
/// A missing author sends the browser back to the list.
pub async fn author_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = parse_record_id(&id, "Author") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };

    match state.author_service.author_with_notes(id).await? {
        Some(found) => Ok(AuthorDeleteTemplate {
            title: "Delete Author".to_string(),
            author: found.record,
            notes: found.notes,
        }
        .into_response()),
        None => Ok(Redirect::to(LIST_URL).into_response()),
    }
}

/// `POST /catalog/author/{id}/delete`
pub async fn author_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = parse_record_id(&id, "Author") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };

    match state.author_service.delete_author(id).await? {
        DeleteOutcome::Blocked(found) => Ok(AuthorDeleteTemplate {
            title: "Delete Author".to_string(),
            author: found.record,
            notes: found.notes,
        }
        .into_response()),
        DeleteOutcome::Deleted | DeleteOutcome::Missing => {
            Ok(Redirect::to(LIST_URL).into_response())
        }
    }
}

/// `GET /catalog/author/{id}/update`
pub async fn author_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Author")?;
    let author = state.author_service.get_author(id).await?;

    Ok(AuthorFormTemplate::update(AuthorForm::from_author(&author), Vec::new()).into_response())
}

/// `POST /catalog/author/{id}/update`
pub async fn author_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    HtmlForm(form): HtmlForm<AuthorForm>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Author")?;

    let author = match form.parse() {
        Ok(author) => author,
        Err(Invalid { form, errors }) => {
            state.author_service.get_author(id).await?;
            return Ok(AuthorFormTemplate::update(form, errors).into_response());
        }
    };

    let author = state.author_service.update_author(id, author).await?;
    Ok(Redirect::to(&author.url()).into_response())
}
