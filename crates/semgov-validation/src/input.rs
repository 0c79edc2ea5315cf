//! Input gate run before any AI call.
//!
//! Rejects selections that are empty, too short, too long, or look like a
//! whole document rather than a passage. Every rejection carries a message
//! fit to show the user; none of them echo the selected text.

use std::sync::LazyLock;

use regex::Regex;
use semgov_core::config::InputConfig;
use semgov_core::constants::ALLOWED_INTENTS;
use semgov_core::errors::{SemgovError, SemgovResult};
use tracing::debug;

static BIBLIOGRAPHY_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\[\d+\]",
        r"(?mi)^\s*References\s*$",
        r"(?mi)^\s*Bibliography\s*$",
        r"(?mi)^\s*Works Cited\s*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Validates a selection and its intent against [`InputConfig`] limits.
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    config: InputConfig,
}

impl InputValidator {
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Checks run in order and the first failure wins: intent, presence,
    /// whitespace, minimum length, maximum length, document heuristics.
    pub fn validate(&self, selected_text: &str, intent: &str) -> SemgovResult<()> {
        let result = self.check(selected_text, intent);
        if let Err(SemgovError::InputRejected { reason }) = &result {
            debug!(chars = selected_text.chars().count(), intent, reason = %reason, "input rejected");
        }
        result
    }

    fn check(&self, text: &str, intent: &str) -> SemgovResult<()> {
        if intent.is_empty() {
            return reject("Please specify what you want to do: rewrite, humanize, or clarify.");
        }
        if !ALLOWED_INTENTS.contains(&intent) {
            return reject(format!(
                "Unknown intent '{intent}'. Please choose: rewrite, humanize, or clarify."
            ));
        }
        if text.is_empty() {
            return reject("No text selected. Please highlight the text you want to modify.");
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return reject(
                "Selected text contains only whitespace. Please select actual text content.",
            );
        }

        let trimmed_chars = trimmed.chars().count();
        if trimmed_chars < self.config.min_text_length {
            return reject(format!(
                "Selected text is too short ({trimmed_chars} characters). Minimum is {} characters. \
                 Please select a more complete passage.",
                self.config.min_text_length
            ));
        }

        let chars = text.chars().count();
        if chars > self.config.max_text_length {
            return reject(format!(
                "Selected text is too long ({chars} characters). Maximum is {} characters. \
                 Please highlight a specific section.",
                self.config.max_text_length
            ));
        }

        if text.matches('\n').count() > self.config.max_newlines {
            return reject(
                "Input appears to be a full document section. \
                 Please highlight a specific section to modify.",
            );
        }

        if chars > self.config.bibliography_min_length
            && BIBLIOGRAPHY_MARKERS.iter().any(|re| re.is_match(text))
        {
            return reject(
                "Input appears to contain references or bibliography. \
                 Please select the text you want to modify, excluding reference lists.",
            );
        }

        Ok(())
    }
}

fn reject(reason: impl Into<String>) -> SemgovResult<()> {
    Err(SemgovError::InputRejected {
        reason: reason.into(),
    })
}
