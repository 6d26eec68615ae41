//! Component form.

use serde::Deserialize;
use validator::Validate;

use super::{Invalid, check};
use crate::domain::entities::{Component, NewComponent};

const FIELDS: &[&str] = &["name", "description"];

/// Component create/update form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ComponentForm {
    #[serde(default)]
    #[validate(length(
        min = 2,
        max = 10,
        message = "Component Name must contain between two (2) and ten (10) characters."
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Description must contain at least ten (10) characters."))]
    pub description: String,
}

impl ComponentForm {
    pub fn from_component(component: &Component) -> Self {
        Self {
            name: component.name.clone(),
            description: component.description.clone(),
        }
    }

    /// Trims, validates and converts the submission.
    pub fn parse(self) -> Result<NewComponent, Invalid<Self>> {
        let form = Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        };

        let errors = check(&form, FIELDS);
        if !errors.is_empty() {
            return Err(Invalid { form, errors });
        }

        Ok(NewComponent {
            name: form.name,
            description: form.description,
        })
    }
}
