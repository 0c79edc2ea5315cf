use std::fmt;

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Family of factual-claim pattern that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Statistic,
    Causation,
    Authority,
    Temporal,
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Statistic => "statistic",
            Self::Causation => "causation",
            Self::Authority => "authority",
            Self::Temporal => "temporal",
        };
        f.write_str(name)
    }
}

/// A factual claim detected in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Context snippet around the match.
    pub text: String,
    pub claim_type: ClaimType,
    pub needs_citation: bool,
    pub has_citation: bool,
    /// Byte offset of the match start in the source text.
    pub start_pos: usize,
    /// Byte offset of the match end in the source text.
    pub end_pos: usize,
}

/// Claim and citation analysis of a proposed rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimValidationResult {
    /// Claims found in the proposed text.
    #[serde(default)]
    pub claims_detected: Vec<Claim>,
    /// Proposed claims with no counterpart in the original.
    #[serde(default)]
    pub new_claim_count: usize,
    /// Total number of new claims without a nearby citation.
    #[serde(default)]
    pub uncited_count: usize,
    /// Snippets of uncited claims, capped for reporting.
    #[serde(default)]
    pub uncited_claims: Vec<String>,
    /// Citations in the proposed text.
    #[serde(default)]
    pub citation_count: usize,
    /// Citations in the original text.
    #[serde(default)]
    pub original_citation_count: usize,
    #[serde(default)]
    pub risk_level: RiskLevel,
}

impl ClaimValidationResult {
    pub fn needs_review(&self) -> bool {
        self.uncited_count > 0
    }
}
