//! Author form.

use serde::Deserialize;
use validator::Validate;

use super::{ALPHANUMERIC, FieldError, Invalid, check, sort_by_field};
use crate::domain::entities::{Author, NewAuthor};
use crate::utils::{format_input_date, parse_iso_date};

const FIELDS: &[&str] = &["first_name", "family_name", "date_joined"];

const NAME_MAX_CHARS: usize = 100;

/// Author create/update form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AuthorForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "First Name must be specified."))]
    #[validate(regex(
        path = "*ALPHANUMERIC",
        message = "First Name can only include alpha-numeric characters."
    ))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Family Name must be specified."))]
    #[validate(regex(
        path = "*ALPHANUMERIC",
        message = "Family Name can only include alpha-numeric characters."
    ))]
    pub family_name: String,

    /// Optional ISO-8601 date.
    #[serde(default)]
    pub date_joined: String,
}

impl AuthorForm {
    /// Prefills the form from a stored author.
    pub fn from_author(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_joined: format_input_date(author.date_joined),
        }
    }

    /// Trims, validates and converts the submission.
    pub fn parse(self) -> Result<NewAuthor, Invalid<Self>> {
        let form = Self {
            first_name: self.first_name.trim().to_string(),
            family_name: self.family_name.trim().to_string(),
            date_joined: self.date_joined.trim().to_string(),
        };

        let mut errors = check(&form, FIELDS);

        for (field, label, value) in [
            ("first_name", "First Name", &form.first_name),
            ("family_name", "Family Name", &form.family_name),
        ] {
            if value.chars().count() > NAME_MAX_CHARS {
                errors.push(FieldError {
                    field: field.to_string(),
                    message: format!("{label} must be at most {NAME_MAX_CHARS} characters."),
                });
            }
        }

        let date_joined = parse_iso_date(&form.date_joined);
        if !form.date_joined.is_empty() && date_joined.is_none() {
            errors.push(FieldError::new(
                "date_joined",
                "Date Joined must be a valid ISO-8601 date.",
            ));
        }

        if !errors.is_empty() {
            sort_by_field(&mut errors, FIELDS);
            return Err(Invalid { form, errors });
        }

        Ok(NewAuthor {
            first_name: form.first_name,
            family_name: form.family_name,
            date_joined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form(first: &str, family: &str, date: &str) -> AuthorForm {
        AuthorForm {
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_joined: date.to_string(),
        }
    }

    #[test]
    fn test_valid_author_is_trimmed() {
        let author = form("  Ada ", "Lovelace", "1833-06-05").parse().unwrap();

        assert_eq!(author.first_name, "Ada");
        assert_eq!(author.date_joined, NaiveDate::from_ymd_opt(1833, 6, 5));
    }

    #[test]
    fn test_date_is_optional() {
        let author = form("Ada", "Lovelace", "").parse().unwrap();
        assert!(author.date_joined.is_none());
    }

    #[test]
    fn test_non_alphanumeric_name_rejected() {
        let invalid = form("Ada", "Love-lace", "").parse().unwrap_err();

        assert_eq!(invalid.errors.len(), 1);
        assert_eq!(invalid.errors[0].field, "family_name");
        assert_eq!(
            invalid.errors[0].message,
            "Family Name can only include alpha-numeric characters."
        );
        assert_eq!(invalid.form.family_name, "Love-lace");
    }

    #[test]
    fn test_missing_names_and_bad_date() {
        let invalid = form(" ", "", "someday").parse().unwrap_err();

        let fields: Vec<&str> = invalid.errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"first_name"));
        assert!(fields.contains(&"family_name"));
        assert_eq!(fields.last(), Some(&"date_joined"));
        assert_eq!(fields.first(), Some(&"first_name"));
    }

    #[test]
    fn test_overlong_name_gets_length_message() {
        let long = "a".repeat(101);
        let invalid = form(&long, "Lovelace", "").parse().unwrap_err();

        assert_eq!(invalid.errors.len(), 1);
        assert_eq!(invalid.errors[0].field, "first_name");
        assert_eq!(
            invalid.errors[0].message,
            "First Name must be at most 100 characters."
        );

        assert!(form(&"a".repeat(100), "Lovelace", "").parse().is_ok());
    }

    #[test]
    fn test_from_author_round_trip_date() {
        let author = Author::new(
            1,
            "Ada".to_string(),
            "Lovelace".to_string(),
            NaiveDate::from_ymd_opt(2020, 1, 2),
        );
        assert_eq!(AuthorForm::from_author(&author).date_joined, "2020-01-02");
    }
}
