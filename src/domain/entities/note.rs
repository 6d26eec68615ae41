//! Domain entity representing a catalog note.

use chrono::NaiveDate;

use super::{RecordId, format_medium_date};

/// A reference note.
///
/// `author`, `languages` and `components` hold identifiers only; resolving
/// them to records is an explicit join performed by the services.
/// The store does not check that the referenced records exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub author: RecordId,
    pub summary: String,
    pub text: String,
    pub languages: Vec<RecordId>,
    pub components: Vec<RecordId>,
    pub date_created: Option<NaiveDate>,
}

impl Note {
    /// Canonical detail page URL.
    pub fn url(&self) -> String {
        format!("/catalog/note/{}", self.id)
    }

    pub fn date_created_formatted(&self) -> String {
        format_medium_date(self.date_created)
    }

    pub fn references_language(&self, language_id: RecordId) -> bool {
        self.languages.contains(&language_id)
    }

    pub fn references_component(&self, component_id: RecordId) -> bool {
        self.components.contains(&component_id)
    }
}

/// Writable note fields, used for both inserts and full updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub title: String,
    pub author: RecordId,
    pub summary: String,
    pub text: String,
    pub languages: Vec<RecordId>,
    pub components: Vec<RecordId>,
    pub date_created: Option<NaiveDate>,
}

impl NewNote {
    pub fn into_note(self, id: RecordId) -> Note {
        Note {
            id,
            title: self.title,
            author: self.author,
            summary: self.summary,
            text: self.text,
            languages: self.languages,
            components: self.components,
            date_created: self.date_created,
        }
    }
}

impl From<&Note> for NewNote {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            author: note.author,
            summary: note.summary.clone(),
            text: note.text.clone(),
            languages: note.languages.clone(),
            components: note.components.clone(),
            date_created: note.date_created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        NewNote {
            title: "Iterators".to_string(),
            author: 1,
            summary: "Lazy sequences".to_string(),
            text: "Iterators are lazy and composable.".to_string(),
            languages: vec![2, 3],
            components: vec![],
            date_created: None,
        }
        .into_note(5)
    }

    #[test]
    fn test_note_url() {
        assert_eq!(sample_note().url(), "/catalog/note/5");
    }

    #[test]
    fn test_note_date_created_formatted_empty() {
        assert_eq!(sample_note().date_created_formatted(), "");
    }

    #[test]
    fn test_note_references() {
        let note = sample_note();
        assert!(note.references_language(3));
        assert!(!note.references_language(4));
        assert!(!note.references_component(2));
    }

    #[test]
    fn test_new_note_from_note_keeps_fields() {
        let note = sample_note();
        let fields = NewNote::from(&note);
        assert_eq!(fields.into_note(note.id), note);
    }
}
