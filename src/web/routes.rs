//! Catalog route configuration.

use crate::state::AppState;
use crate::web::handlers::{authors, components, index, languages, notes};
use axum::{Router, routing::get};

/// Routes mounted under `/catalog`.
///
/// # Endpoints
///
/// - `GET /` - Home page with record counts
/// - `GET /{resource}s` - List page
/// - `GET|POST /{resource}/create` - Create form
/// - `GET /{resource}/{id}` - Detail page
/// - `GET|POST /{resource}/{id}/update` - Update form
/// - `GET|POST /{resource}/{id}/delete` - Delete confirmation
///
/// where `{resource}` is one of `note`, `author`, `language`, `component`.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        // Notes
        .route("/notes", get(notes::note_list))
        .route(
            "/note/create",
            get(notes::note_create_get).post(notes::note_create_post),
        )
        .route("/note/{id}", get(notes::note_detail))
        .route(
            "/note/{id}/update",
            get(notes::note_update_get).post(notes::note_update_post),
        )
        .route(
            "/note/{id}/delete",
            get(notes::note_delete_get).post(notes::note_delete_post),
        )
        // Authors
        .route("/authors", get(authors::author_list))
        .route(
            "/author/create",
            get(authors::author_create_get).post(authors::author_create_post),
        )
        .route("/author/{id}", get(authors::author_detail))
        .route(
            "/author/{id}/update",
            get(authors::author_update_get).post(authors::author_update_post),
        )
        .route(
            "/author/{id}/delete",
            get(authors::author_delete_get).post(authors::author_delete_post),
        )
        // Languages
        .route("/languages", get(languages::language_list))
        .route(
            "/language/create",
            get(languages::language_create_get).post(languages::language_create_post),
        )
        .route("/language/{id}", get(languages::language_detail))
        .route(
            "/language/{id}/update",
            get(languages::language_update_get).post(languages::language_update_post),
        )
        .route(
            "/language/{id}/delete",
            get(languages::language_delete_get).post(languages::language_delete_post),
        )
        // Components
        .route("/components", get(components::component_list))
        .route(
            "/component/create",
            get(components::component_create_get).post(components::component_create_post),
        )
        .route("/component/{id}", get(components::component_detail))
        .route(
            "/component/{id}/update",
            get(components::component_update_get).post(components::component_update_post),
        )
        .route(
            "/component/{id}/delete",
            get(components::component_delete_get).post(components::component_delete_post),
        )
}
