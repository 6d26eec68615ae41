//! Record identifier parsing for path segments.

use crate::domain::entities::RecordId;
use crate::error::AppError;
use serde_json::json;

/// Parses a `{id}` path segment into a [`RecordId`].
///
/// Identifiers are positive integers. Anything else cannot name a stored
/// record, so it is reported the same way as an unassigned identifier.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] naming `resource` when the segment is not
/// a positive integer.
pub fn parse_record_id(raw: &str, resource: &str) -> Result<RecordId, AppError> {
    raw.trim()
        .parse::<RecordId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::not_found(format!("{resource} not found."), json!({"id": raw})))
}
