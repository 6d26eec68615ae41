//! Note pages.
//!
//! The note form carries an author drop-down and two checkbox groups, so
//! every render of it needs the candidate authors, languages and
//! components alongside the submitted or stored values.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::application::services::{NoteDetail, NoteFormChoices, NoteListItem};
use crate::domain::entities::Note;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::parse_record_id;
use crate::web::extract::HtmlForm;
use crate::web::forms::{AuthorChoice, CheckChoice, FieldError, Invalid, NoteForm};

const LIST_URL: &str = "/catalog/notes";

#[derive(Template, WebTemplate)]
#[template(path = "note_list.html")]
pub struct NoteListTemplate {
    pub title: String,
    pub notes: Vec<NoteListItem>,
}

#[derive(Template, WebTemplate)]
#[template(path = "note_detail.html")]
pub struct NoteDetailTemplate {
    pub title: String,
    pub detail: NoteDetail,
}

#[derive(Template, WebTemplate)]
#[template(path = "note_form.html")]
pub struct NoteFormTemplate {
    pub title: String,
    pub form: NoteForm,
    pub errors: Vec<FieldError>,
    pub authors: Vec<AuthorChoice>,
    pub languages: Vec<CheckChoice>,
    pub components: Vec<CheckChoice>,
}

#[derive(Template, WebTemplate)]
#[template(path = "note_delete.html")]
pub struct NoteDeleteTemplate {
    pub title: String,
    pub note: Note,
}

impl NoteFormTemplate {
    fn new(title: &str, form: NoteForm, errors: Vec<FieldError>, choices: &NoteFormChoices) -> Self {
        Self {
            title: title.to_string(),
            authors: form.author_choices(&choices.authors),
            languages: form.language_choices(&choices.languages),
            components: form.component_choices(&choices.components),
            form,
            errors,
        }
    }
}

/// `GET /catalog/notes`
pub async fn note_list(State(state): State<AppState>) -> Result<Response, AppError> {
    let notes = state.note_service.list_notes().await?;

    Ok(NoteListTemplate {
        title: "Note List".to_string(),
        notes,
    }
    .into_response())
}

/// `GET /catalog/note/{id}`
pub async fn note_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Note")?;

    let detail = state
        .note_service
        .note_detail(id)
        .await?
        .ok_or_else(|| AppError::not_found("Note not found.", json!({ "id": id })))?;

    Ok(NoteDetailTemplate {
        title: detail.note.title.clone(),
        detail,
    }
    .into_response())
}

/// `GET /catalog/note/create`
pub async fn note_create_get(State(state): State<AppState>) -> Result<Response, AppError> {
    let choices = state.note_service.form_choices().await?;

    Ok(NoteFormTemplate::new("Create Note", NoteForm::default(), Vec::new(), &choices).into_response())
}

/// `POST /catalog/note/create`
pub async fn note_create_post(
    State(state): State<AppState>,
    HtmlForm(pairs): HtmlForm<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let new_note = match NoteForm::from_pairs(pairs).parse() {
        Ok(new_note) => new_note,
        Err(Invalid { form, errors }) => {
            let choices = state.note_service.form_choices().await?;
            return Ok(NoteFormTemplate::new("Create Note", form, errors, &choices).into_response());
        }
    };

    let note = state.note_service.create_note(new_note).await?;
    Ok(Redirect::to(&note.url()).into_response())
}

/// `GET /catalog/note/{id}/delete`
pub async fn note_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = parse_record_id(&id, "Note") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };

    match state.note_service.get_note(id).await {
        Ok(note) => Ok(NoteDeleteTemplate {
            title: "Delete Note".to_string(),
            note,
        }
        .into_response()),
        Err(AppError::NotFound { .. }) => Ok(Redirect::to(LIST_URL).into_response()),
        Err(e) => Err(e),
    }
}

/// `POST /catalog/note/{id}/delete`
pub async fn note_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if let Ok(id) = parse_record_id(&id, "Note") {
        state.note_service.delete_note(id).await?;
    }

    Ok(Redirect::to(LIST_URL).into_response())
}

/// `GET /catalog/note/{id}/update`
pub async fn note_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Note")?;
    let (note, choices) = state.note_service.note_with_choices(id).await?;

    Ok(NoteFormTemplate::new("Update Note", NoteForm::from_note(&note), Vec::new(), &choices)
        .into_response())
}

/// `POST /catalog/note/{id}/update`
pub async fn note_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    HtmlForm(pairs): HtmlForm<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let id = parse_record_id(&id, "Note")?;

    let note = match NoteForm::from_pairs(pairs).parse() {
        Ok(note) => note,
        Err(Invalid { form, errors }) => {
            let (_, choices) = state.note_service.note_with_choices(id).await?;
            return Ok(NoteFormTemplate::new("Update Note", form, errors, &choices).into_response());
        }
    };

    let note = state.note_service.update_note(id, note).await?;
    Ok(Redirect::to(&note.url()).into_response())
}
