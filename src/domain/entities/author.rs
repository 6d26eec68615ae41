//! Domain entity representing a note author.

use chrono::NaiveDate;

use super::{RecordId, format_medium_date};

/// A person credited with writing notes.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: RecordId,
    pub first_name: String,
    pub family_name: String,
    pub date_joined: Option<NaiveDate>,
}

impl Author {
    /// Creates an Author from stored fields.
    pub fn new(
        id: RecordId,
        first_name: String,
        family_name: String,
        date_joined: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            first_name,
            family_name,
            date_joined,
        }
    }

    /// Display name in `Family, First` form.
    ///
    /// Returns an empty string when either part is missing.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Canonical detail page URL.
    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }

    pub fn date_joined_formatted(&self) -> String {
        format_medium_date(self.date_joined)
    }
}

/// Writable author fields, used for both inserts and full updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub first_name: String,
    pub family_name: String,
    pub date_joined: Option<NaiveDate>,
}

impl NewAuthor {
    /// Materializes the fields under an assigned identifier.
    pub fn into_author(self, id: RecordId) -> Author {
        Author::new(id, self.first_name, self.family_name, self.date_joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_name() {
        let author = Author::new(1, "Ada".to_string(), "Lovelace".to_string(), None);
        assert_eq!(author.name(), "Lovelace, Ada");
    }

    #[test]
    fn test_author_name_missing_part() {
        let author = Author::new(1, String::new(), "Lovelace".to_string(), None);
        assert_eq!(author.name(), "");
    }

    #[test]
    fn test_author_url_and_date() {
        let author = Author::new(
            42,
            "Grace".to_string(),
            "Hopper".to_string(),
            NaiveDate::from_ymd_opt(2023, 12, 9),
        );
        assert_eq!(author.url(), "/catalog/author/42");
        assert_eq!(author.date_joined_formatted(), "Dec 9, 2023");
    }

    #[test]
    fn test_new_author_into_author() {
        let new_author = NewAuthor {
            first_name: "Alan".to_string(),
            family_name: "Turing".to_string(),
            date_joined: None,
        };

        let author = new_author.into_author(7);
        assert_eq!(author.id, 7);
        assert_eq!(author.family_name, "Turing");
        assert!(author.date_joined_formatted().is_empty());
    }
}
