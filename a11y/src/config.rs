use std::env;
use std::fs;
use std::path::PathBuf;

use accordion_shared::{AccordionConfig, AccordionController};

use crate::error::ConfigError;
use crate::report::OutputFormat;

#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    pub content_path: Option<PathBuf>,
    pub fail_on_warning: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let format = match env::var("AUDIT_FORMAT") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidFormat)?,
            Err(_) => OutputFormat::Text,
        };

        let fail_on_warning = match env::var("AUDIT_FAIL_ON_WARNING") {
            Ok(value) => value.to_lowercase().parse::<bool>().map_err(|_| ConfigError::InvalidFlag {
                name: "AUDIT_FAIL_ON_WARNING",
                value,
            })?,
            Err(_) => false,
        };

        Ok(Self {
            format,
            content_path: env::var("AUDIT_CONTENT_PATH").ok().map(PathBuf::from),
            fail_on_warning,
        })
    }

    /// Controller for the configured content, or the built-in sections.
    pub fn load_controller(&self) -> Result<AccordionController, ConfigError> {
        let Some(ref path) = self.content_path else {
            return Ok(AccordionController::default());
        };

        log::info!("Loading accordion content from {}", path.display());
        let json = fs::read_to_string(path)?;
        let config = AccordionConfig::from_json(&json)?;
        Ok(AccordionController::new(config)?)
    }
}
