//! Domain entity representing a language component.

use super::RecordId;

/// A language building block (closures, traits, loops...) that notes can
/// be filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

impl Component {
    pub fn new(id: RecordId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    /// Canonical detail page URL.
    pub fn url(&self) -> String {
        format!("/catalog/component/{}", self.id)
    }
}

/// Writable component fields, used for both inserts and full updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComponent {
    pub name: String,
    pub description: String,
}

impl NewComponent {
    pub fn into_component(self, id: RecordId) -> Component {
        Component::new(id, self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_url() {
        let component = Component::new(9, "Closure".to_string(), "Anonymous functions".to_string());
        assert_eq!(component.url(), "/catalog/component/9");
    }
}
