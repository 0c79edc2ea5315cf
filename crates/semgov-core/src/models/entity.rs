use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Entities pulled out of one text, grouped by category in match order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityExtractionResult {
    pub numbers: Vec<String>,
    pub percentages: Vec<String>,
    pub dates: Vec<String>,
    pub years: Vec<String>,
    pub proper_nouns: Vec<String>,
    pub citations: Vec<String>,
}

impl EntityExtractionResult {
    /// All entities as one set, category tags dropped.
    pub fn all_entities(&self) -> BTreeSet<String> {
        self.numbers
            .iter()
            .chain(&self.percentages)
            .chain(&self.dates)
            .chain(&self.years)
            .chain(&self.proper_nouns)
            .chain(&self.citations)
            .cloned()
            .collect()
    }

    /// Numeric and percentage tokens, numbers first.
    pub fn numeric_tokens(&self) -> Vec<String> {
        self.numbers
            .iter()
            .chain(&self.percentages)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
            && self.percentages.is_empty()
            && self.dates.is_empty()
            && self.years.is_empty()
            && self.proper_nouns.is_empty()
            && self.citations.is_empty()
    }
}

/// A numeric token that was paired with a different value in the rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberChange {
    pub original: String,
    pub proposed: String,
}

/// Entity preservation between an original and a proposed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityValidationResult {
    pub preserved: bool,
    /// Entities of the original absent from the proposal, sorted.
    #[serde(default)]
    pub missing: Vec<String>,
    /// Entities of the proposal absent from the original, sorted.
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub changed_numbers: Vec<NumberChange>,
    #[serde(default)]
    pub risk_level: RiskLevel,
}

impl Default for EntityValidationResult {
    fn default() -> Self {
        Self {
            preserved: true,
            missing: Vec::new(),
            added: Vec::new(),
            changed_numbers: Vec::new(),
            risk_level: RiskLevel::None,
        }
    }
}
