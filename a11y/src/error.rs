use accordion_shared::AccordionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid AUDIT_FORMAT: {0}")]
    InvalidFormat(String),

    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },

    #[error("failed to read accordion content: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Content(#[from] AccordionError),
}

#[derive(Debug, Error)]
pub enum AuditError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
