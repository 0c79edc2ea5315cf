use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Similarity thresholds used to map a score onto a risk label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Scores at or above this are `safe` (when entities are preserved).
    pub safe_threshold: f64,
    /// Scores at or above this (and below `safe_threshold`) are `risky`.
    pub risky_threshold: f64,
}

impl ThresholdConfig {
    /// Build and validate a threshold pair.
    pub fn new(safe_threshold: f64, risky_threshold: f64) -> Result<Self, ConfigError> {
        let config = Self {
            safe_threshold,
            risky_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Require `0 <= risky < safe <= 1`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |v: f64| (0.0..=1.0).contains(&v);
        if in_range(self.safe_threshold)
            && in_range(self.risky_threshold)
            && self.safe_threshold > self.risky_threshold
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds {
                safe: self.safe_threshold,
                risky: self.risky_threshold,
            })
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            safe_threshold: defaults::DEFAULT_SAFE_THRESHOLD,
            risky_threshold: defaults::DEFAULT_RISKY_THRESHOLD,
        }
    }
}
