//! Language form.

use serde::Deserialize;
use validator::Validate;

use super::{Invalid, check};
use crate::domain::entities::{Language, NewLanguage};

const FIELDS: &[&str] = &["name", "description"];

/// Language create/update form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LanguageForm {
    #[serde(default)]
    #[validate(length(
        min = 2,
        max = 10,
        message = "Language Name must contain between two (2) and ten (10) characters."
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Description must contain at least ten (10) characters."))]
    pub description: String,
}

impl LanguageForm {
    pub fn from_language(language: &Language) -> Self {
        Self {
            name: language.name.clone(),
            description: language.description.clone(),
        }
    }

    /// Trims, validates and converts the submission.
    pub fn parse(self) -> Result<NewLanguage, Invalid<Self>> {
        let form = Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        };

        let errors = check(&form, FIELDS);
        if !errors.is_empty() {
            return Err(Invalid { form, errors });
        }

        Ok(NewLanguage {
            name: form.name,
            description: form.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_language() {
        let language = LanguageForm {
            name: " Rust ".to_string(),
            description: "Memory safety without GC".to_string(),
        }
        .parse()
        .unwrap();

        assert_eq!(language.name, "Rust");
    }

    #[test]
    fn test_name_length_bounds() {
        let short = LanguageForm {
            name: "R".to_string(),
            description: "Statistics language".to_string(),
        }
        .parse()
        .unwrap_err();
        assert_eq!(short.errors[0].field, "name");

        let long = LanguageForm {
            name: "Smalltalk-80".to_string(),
            description: "Message passing language".to_string(),
        }
        .parse()
        .unwrap_err();
        assert_eq!(long.errors.len(), 1);
    }

    #[test]
    fn test_short_description() {
        let invalid = LanguageForm {
            name: "Go".to_string(),
            description: "Simple".to_string(),
        }
        .parse()
        .unwrap_err();

        assert_eq!(invalid.errors.len(), 1);
        assert_eq!(invalid.errors[0].field, "description");
    }
}
