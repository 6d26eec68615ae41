//! Application error type and its HTTP mapping.
//!
//! Handlers return `Result<Response, AppError>`. Converting an error into a
//! response sets the status code and attaches an [`ErrorReport`] extension;
//! [`crate::web::middleware::error_page`] turns that report into the HTML
//! error page.

use axum::{
    Extension,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

/// Errors surfaced by services and handlers.
///
/// Form validation failures are not errors: handlers re-render the form
/// with field messages instead (see [`crate::web::forms`]).
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested record or page does not exist (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Storage or other unexpected failure (500).
    #[error("{message}")]
    Internal { message: String, details: Value },

    /// The request body could not be read as a form (4xx chosen by the
    /// extractor, e.g. 415 for a wrong content type).
    #[error("{message}")]
    Rejected {
        status: StatusCode,
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Rejected { status, .. } => *status,
        }
    }
}

/// Error context carried in response extensions for the error page.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub message: String,
    pub details: Value,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details) = match self {
            AppError::NotFound { message, details } => (message, details),
            AppError::Internal { message, details } => (message, details),
            AppError::Rejected {
                message, details, ..
            } => (message, details),
        };

        let report = ErrorReport {
            status,
            message: message.clone(),
            details,
        };

        (status, Extension(report), message).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if matches!(e, sqlx::Error::RowNotFound) {
            return AppError::not_found("Record not found", json!({}));
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({ "source": e.to_string() }))
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: "The submitted form could not be read.".to_string(),
            details: json!({ "reason": rejection.body_text() }),
        }
    }
}
