//! Catalog home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::services::CatalogSummary;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub summary: CatalogSummary,
}

/// `GET /catalog`
///
/// Shows how many notes, authors, languages and components are stored.
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let summary = state.catalog_service.summary().await?;

    Ok(IndexTemplate {
        title: "Coding Notes Home".to_string(),
        summary,
    }
    .into_response())
}

/// `GET /`
pub async fn root_redirect() -> impl IntoResponse {
    Redirect::to("/catalog")
}
