//! Renders the HTML error page for failed requests.
//!
//! Handlers return [`AppError`](crate::error::AppError); its response
//! carries an [`ErrorReport`] extension. This middleware swaps the plain-text
//! body for the error template, keeping the status code.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ErrorReport;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub status: u16,
    pub message: String,
    /// Pretty-printed error context; only set in development.
    pub details: Option<String>,
}

impl ErrorTemplate {
    pub fn from_report(report: &ErrorReport, show_details: bool) -> Self {
        let details = show_details
            .then(|| serde_json::to_string_pretty(&report.details).ok())
            .flatten()
            .filter(|d| d != "{}" && d != "null");

        Self {
            title: "Error".to_string(),
            status: report.status.as_u16(),
            message: report.message.clone(),
            details,
        }
    }
}

/// Error page middleware.
///
/// # Integration
///
/// ```rust,ignore
/// Router::new()
///     .nest("/catalog", catalog_routes())
///     .layer(middleware::from_fn_with_state(state.clone(), error_page::layer))
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };

    if report.status.is_server_error() {
        tracing::warn!(status = %report.status, message = %report.message, "Request failed");
    } else {
        tracing::debug!(status = %report.status, message = %report.message, "Request failed");
    }

    (
        report.status,
        ErrorTemplate::from_report(&report, state.show_error_details),
    )
        .into_response()
}
