//! Domain entity representing a programming language.

use super::RecordId;

/// A programming language that notes can be filed under.
///
/// Names are unique by convention only: duplicates are detected with a lookup
/// before insert, not by a storage constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

impl Language {
    pub fn new(id: RecordId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    /// Canonical detail page URL.
    pub fn url(&self) -> String {
        format!("/catalog/language/{}", self.id)
    }
}

/// Writable language fields, used for both inserts and full updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLanguage {
    pub name: String,
    pub description: String,
}

impl NewLanguage {
    pub fn into_language(self, id: RecordId) -> Language {
        Language::new(id, self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_url() {
        let language = Language::new(3, "Rust".to_string(), "Systems language".to_string());
        assert_eq!(language.url(), "/catalog/language/3");
    }
}
