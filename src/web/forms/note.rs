//! Note form, including the multi-select language/component fields.

use validator::Validate;

use super::{FieldError, Invalid, check, sort_by_field};
use crate::domain::entities::{Author, Component, Language, NewNote, Note, RecordId};
use crate::utils::{format_input_date, parse_iso_date};

const FIELDS: &[&str] = &["title", "author", "summary", "text", "date_created"];

/// Note create/update form.
///
/// Built from the raw urlencoded pairs rather than a derived `Deserialize`:
/// a checkbox group may be absent, sent once, or repeated, and all three
/// shapes collapse into a list here.
#[derive(Debug, Clone, Default, Validate)]
pub struct NoteForm {
    #[validate(length(min = 3, message = "Title must contain at least three (3) characters."))]
    pub title: String,

    pub author: String,

    #[validate(length(min = 3, message = "Summary must contain at least three (3) characters."))]
    pub summary: String,

    #[validate(length(min = 10, message = "Text must contain at least ten (10) characters."))]
    pub text: String,

    pub language: Vec<String>,
    pub component: Vec<String>,
    pub date_created: String,
}

/// One `<option>` of the author drop-down.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorChoice {
    pub id: RecordId,
    pub name: String,
    pub selected: bool,
}

/// One checkbox of a language/component group.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckChoice {
    pub id: RecordId,
    pub name: String,
    pub checked: bool,
}

impl NoteForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "title" => form.title = value,
                "author" => form.author = value,
                "summary" => form.summary = value,
                "text" => form.text = value,
                "language" => form.language.push(value),
                "component" => form.component.push(value),
                "date_created" => form.date_created = value,
                _ => {}
            }
        }

        form
    }

    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            author: note.author.to_string(),
            summary: note.summary.clone(),
            text: note.text.clone(),
            language: note.languages.iter().map(|id| id.to_string()).collect(),
            component: note.components.iter().map(|id| id.to_string()).collect(),
            date_created: format_input_date(note.date_created),
        }
    }

    /// Trims, validates and converts the submission.
    pub fn parse(self) -> Result<NewNote, Invalid<Self>> {
        let form = self.trimmed();
        let mut errors = check(&form, FIELDS);

        let author = parse_id(&form.author);
        if author.is_none() {
            errors.push(FieldError::new("author", "Author must be specified."));
        }

        let date_created = parse_iso_date(&form.date_created);
        if !form.date_created.is_empty() && date_created.is_none() {
            errors.push(FieldError::new(
                "date_created",
                "Date Created must be a valid ISO-8601 date.",
            ));
        }

        let author = match author {
            Some(author) if errors.is_empty() => author,
            _ => {
                sort_by_field(&mut errors, FIELDS);
                return Err(Invalid { form, errors });
            }
        };

        Ok(NewNote {
            title: form.title,
            author,
            summary: form.summary,
            text: form.text,
            languages: ids(&form.language),
            components: ids(&form.component),
            date_created,
        })
    }

    pub fn author_choices(&self, authors: &[Author]) -> Vec<AuthorChoice> {
        let current = parse_id(self.author.trim());

        authors
            .iter()
            .map(|a| AuthorChoice {
                id: a.id,
                name: a.name(),
                selected: current == Some(a.id),
            })
            .collect()
    }

    pub fn language_choices(&self, languages: &[Language]) -> Vec<CheckChoice> {
        let picked = ids(&self.language);

        languages
            .iter()
            .map(|l| CheckChoice {
                id: l.id,
                name: l.name.clone(),
                checked: picked.contains(&l.id),
            })
            .collect()
    }

    pub fn component_choices(&self, components: &[Component]) -> Vec<CheckChoice> {
        let picked = ids(&self.component);

        components
            .iter()
            .map(|c| CheckChoice {
                id: c.id,
                name: c.name.clone(),
                checked: picked.contains(&c.id),
            })
            .collect()
    }

    fn trimmed(self) -> Self {
        let trim_all = |values: Vec<String>| -> Vec<String> {
            values
                .into_iter()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect()
        };

        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            summary: self.summary.trim().to_string(),
            text: self.text.trim().to_string(),
            language: trim_all(self.language),
            component: trim_all(self.component),
            date_created: self.date_created.trim().to_string(),
        }
    }
}

fn parse_id(raw: &str) -> Option<RecordId> {
    raw.parse::<RecordId>().ok().filter(|id| *id > 0)
}

fn ids(raw: &[String]) -> Vec<RecordId> {
    let mut ids: Vec<RecordId> = Vec::with_capacity(raw.len());
    for id in raw.iter().filter_map(|v| parse_id(v.trim())) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("title", "Ownership"),
            ("author", "1"),
            ("summary", "Moves and borrows"),
            ("text", "Every value has a single owner."),
        ]
    }

    #[test]
    fn test_multi_select_absent() {
        let form = NoteForm::from_pairs(pairs(&valid_pairs()));
        assert!(form.language.is_empty());
        assert!(form.component.is_empty());
    }

    #[test]
    fn test_multi_select_single_and_repeated() {
        let mut items = valid_pairs();
        items.push(("language", "3"));
        items.push(("component", "4"));
        items.push(("component", "5"));

        let note = NoteForm::from_pairs(pairs(&items)).parse().unwrap();

        assert_eq!(note.languages, vec![3]);
        assert_eq!(note.components, vec![4, 5]);
    }

    #[test]
    fn test_short_title_rejected() {
        let mut items = valid_pairs();
        items[0] = ("title", "ab");

        let invalid = NoteForm::from_pairs(pairs(&items)).parse().unwrap_err();

        assert_eq!(invalid.errors.len(), 1);
        assert_eq!(invalid.errors[0].field, "title");
        assert_eq!(invalid.form.title, "ab");
    }

    #[test]
    fn test_missing_author_and_bad_date_in_field_order() {
        let items = vec![
            ("title", "Ownership"),
            ("author", ""),
            ("summary", "ok"),
            ("text", "Every value has a single owner."),
            ("date_created", "yesterday"),
        ];

        let invalid = NoteForm::from_pairs(pairs(&items)).parse().unwrap_err();
        let fields: Vec<&str> = invalid.errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["author", "summary", "date_created"]);
    }

    #[test]
    fn test_choices_marked_from_submission() {
        let mut items = valid_pairs();
        items.push(("language", "2"));
        let form = NoteForm::from_pairs(pairs(&items));

        let languages = vec![
            Language::new(1, "C".to_string(), "Systems language".to_string()),
            Language::new(2, "Rust".to_string(), "Systems language".to_string()),
        ];
        let authors = vec![
            Author::new(1, "Ada".to_string(), "Lovelace".to_string(), None),
            Author::new(2, "Alan".to_string(), "Turing".to_string(), None),
        ];

        let checked: Vec<bool> = form
            .language_choices(&languages)
            .iter()
            .map(|c| c.checked)
            .collect();
        assert_eq!(checked, vec![false, true]);

        let selected: Vec<bool> = form
            .author_choices(&authors)
            .iter()
            .map(|c| c.selected)
            .collect();
        assert_eq!(selected, vec![true, false]);
    }

    #[test]
    fn test_from_note_keeps_references() {
        let note = Note {
            id: 9,
            title: "Traits".to_string(),
            author: 2,
            summary: "Shared behaviour".to_string(),
            text: "Traits define shared behaviour.".to_string(),
            languages: vec![1],
            components: vec![7, 8],
            date_created: None,
        };

        let form = NoteForm::from_note(&note);
        assert_eq!(form.author, "2");
        assert_eq!(form.component, vec!["7", "8"]);
        assert_eq!(form.parse().unwrap(), NewNote::from(&note));
    }
}
