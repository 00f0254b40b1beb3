use thiserror::Error;

/// Reasons accordion content cannot be turned into an accessible widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccordionError {
    #[error("accordion needs at least one item")]
    NoItems,

    #[error("accordion list needs a non-empty aria-label")]
    MissingLabel,

    #[error("item {index} has an empty title, its control would have no accessible name")]
    MissingTitle { index: usize },

    #[error("duplicate item id: {0}")]
    DuplicateItemId(String),

    #[error("invalid accordion content: {0}")]
    InvalidContent(String),
}

impl From<serde_json::Error> for AccordionError {
    fn from(err: serde_json::Error) -> Self {
        AccordionError::InvalidContent(err.to_string())
    }
}
