//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Redirects to `/catalog`
//! - `GET  /health`      - Health check (JSON)
//! - `/catalog/*`        - Catalog pages
//! - `/static/*`         - Static assets
//!
//! Anything else renders the 404 error page.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Error page** - HTML rendering of [`crate::AppError`] responses
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::{not_found_handler, root_redirect};
use crate::web::middleware::{error_page, tracing};
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes and middleware, without path
/// normalization.
///
/// `static_dir` is the directory served under `/static`.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health_handler))
        .nest("/catalog", web::routes::catalog_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_page::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] with trailing
/// slashes trimmed before routing.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, static_dir))
}
