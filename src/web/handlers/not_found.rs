//! Fallback for unmatched paths.

use serde_json::json;

use crate::error::AppError;

pub async fn not_found_handler() -> AppError {
    AppError::not_found("Page not found.", json!({}))
}
