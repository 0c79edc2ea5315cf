pub mod defaults;
mod embedding_config;
mod input_config;
mod observability_config;
mod threshold_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use input_config::InputConfig;
pub use observability_config::ObservabilityConfig;
pub use threshold_config::ThresholdConfig;

use crate::errors::ConfigError;

/// Top-level configuration, one section per subsystem.
///
/// Every section falls back to its defaults, so an empty TOML document is a
/// valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SemgovConfig {
    pub thresholds: ThresholdConfig,
    pub embedding: EmbeddingConfig,
    pub input: InputConfig,
    pub observability: ObservabilityConfig,
}

impl SemgovConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()
    }
}
