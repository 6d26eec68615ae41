//! Core domain entities representing the catalog data model.
//!
//! Entities are plain data structures carrying their stored fields plus a few
//! derived "virtual" accessors (canonical URL, display name, formatted dates).
//!
//! # Entity Types
//!
//! - [`Author`] - A person who writes notes
//! - [`Language`] - A programming language a note covers
//! - [`Component`] - A building block (loop, closure, trait...) a note covers
//! - [`Note`] - A reference note linking one author to languages and components
//!
//! # Design Pattern
//!
//! Each entity has a companion `NewX` struct holding the writable fields.
//! The same struct is used for inserts and for full in-place updates, since
//! every update replaces all fields while preserving the identifier.

pub mod author;
pub mod component;
pub mod language;
pub mod note;

pub use author::{Author, NewAuthor};
pub use component::{Component, NewComponent};
pub use language::{Language, NewLanguage};
pub use note::{NewNote, Note};

use chrono::NaiveDate;

/// Store-assigned record identifier.
pub type RecordId = i64;

/// Formats a date the way catalog pages display it, e.g. `Oct 19, 2026`.
pub fn format_medium_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_medium_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7);
        assert_eq!(format_medium_date(date), "Mar 7, 2024");
        assert_eq!(format_medium_date(None), "");
    }
}
