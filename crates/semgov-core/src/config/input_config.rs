use serde::{Deserialize, Serialize};

use super::defaults;

/// Limits enforced by the input gate before any AI call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum length of the trimmed selection, in characters.
    pub min_text_length: usize,
    /// Maximum length of the raw selection, in characters.
    pub max_text_length: usize,
    /// More newlines than this looks like a whole document.
    pub max_newlines: usize,
    /// Bibliography markers are only rejected above this length.
    pub bibliography_min_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_text_length: defaults::DEFAULT_MIN_TEXT_LENGTH,
            max_text_length: defaults::DEFAULT_MAX_TEXT_LENGTH,
            max_newlines: defaults::DEFAULT_MAX_NEWLINES,
            bibliography_min_length: defaults::DEFAULT_BIBLIOGRAPHY_MIN_LENGTH,
        }
    }
}
