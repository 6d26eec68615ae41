//! HTML form payloads and their validation.
//!
//! Each form struct mirrors the fields of one `<form>`, keeps the raw
//! submitted strings (so a rejected form can be re-rendered as typed), and
//! converts into a domain `NewX` value once it validates.
//!
//! Inputs are trimmed before validation. Escaping happens at render time in
//! the templates, never on input.

pub mod author;
pub mod component;
pub mod language;
pub mod note;

pub use author::AuthorForm;
pub use component::ComponentForm;
pub use language::LanguageForm;
pub use note::{AuthorChoice, CheckChoice, NoteForm};

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationErrors;

/// ASCII letters and digits only.
pub(crate) static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// A validation message attached to one form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// A form that failed validation, kept for re-rendering.
#[derive(Debug, Clone)]
pub struct Invalid<F> {
    pub form: F,
    pub errors: Vec<FieldError>,
}

/// Flattens `validator` errors into field messages, ordered as the fields
/// appear on the form.
pub fn field_errors(errors: &ValidationErrors, order: &[&str]) -> Vec<FieldError> {
    let by_field = errors.field_errors();

    order
        .iter()
        .filter_map(|field| by_field.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect()
}

/// Runs `validator` checks, returning ordered field messages.
pub(crate) fn check<T: validator::Validate>(form: &T, order: &[&str]) -> Vec<FieldError> {
    match form.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => field_errors(&errors, order),
    }
}

/// Orders errors by the position of their field in `order`. Stable within
/// a field.
pub(crate) fn sort_by_field(errors: &mut [FieldError], order: &[&str]) {
    errors.sort_by_key(|e| {
        order
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(order.len())
    });
}
