use serde::{Deserialize, Serialize};

use crate::error::AccordionError;

// ============================================================================
// Content Types
// ============================================================================

/// Label announced for the list that holds the accordion sections.
pub const DEFAULT_LIST_LABEL: &str = "Acordeón accesible amb llista";

const DEFAULT_BODY: &str = "Lorem ipsum dolor sit amet";

/// One accordion section. Fixed for the lifetime of the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Content identity, unique within one accordion. DOM ids are derived
    /// from the section position instead, see `markup::control_id`.
    pub id: String,
    pub title: String,
    pub body: String,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Index of the expanded section, `None` when every section is collapsed.
pub type OpenIndex = Option<usize>;

// ============================================================================
// Configuration Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionConfig {
    #[serde(default = "default_label")]
    pub label: String,
    pub items: Vec<Item>,
}

fn default_label() -> String {
    DEFAULT_LIST_LABEL.to_string()
}

impl Default for AccordionConfig {
    fn default() -> Self {
        let items = (1..=3)
            .map(|n| Item::new(format!("content-{}", n), format!("Cabecera {}", n), DEFAULT_BODY))
            .collect();

        Self {
            label: default_label(),
            items,
        }
    }
}

impl AccordionConfig {
    /// Parse content from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, AccordionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the content can be rendered as an accessible accordion.
    pub fn validate(&self) -> Result<(), AccordionError> {
        if self.items.is_empty() {
            return Err(AccordionError::NoItems);
        }
        if self.label.trim().is_empty() {
            return Err(AccordionError::MissingLabel);
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.title.trim().is_empty() {
                return Err(AccordionError::MissingTitle { index });
            }
            if self.items[..index].iter().any(|other| other.id == item.id) {
                return Err(AccordionError::DuplicateItemId(item.id.clone()));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
