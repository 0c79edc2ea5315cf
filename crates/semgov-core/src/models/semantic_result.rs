use serde::{Deserialize, Serialize};

use super::{ClaimValidationResult, EntityValidationResult, PolarityAnalysis, RiskLabel, ToneValidationResult};

/// Result of comparing an original and a proposed text.
///
/// Produced once per validation call and handed, unchanged, to the decision
/// engine. Optional sections default to "nothing found" when absent from
/// serialized input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticResult {
    /// Cosine similarity in [0, 1], rounded to 3 decimals.
    pub similarity_score: f64,
    pub risk_label: RiskLabel,
    #[serde(default = "default_true")]
    pub entity_preserved: bool,
    #[serde(default)]
    pub entity_details: Option<EntityValidationResult>,
    #[serde(default)]
    pub polarity_flip: bool,
    #[serde(default)]
    pub polarity_details: Option<PolarityAnalysis>,
    /// Human-readable findings, in pipeline order.
    #[serde(default)]
    pub validation_flags: Vec<String>,
    #[serde(default)]
    pub claim_analysis: Option<ClaimValidationResult>,
    #[serde(default)]
    pub tone_analysis: Option<ToneValidationResult>,
}

fn default_true() -> bool {
    true
}

impl SemanticResult {
    /// A bare result with only a score and label, as an older producer
    /// would emit it.
    pub fn from_label(similarity_score: f64, risk_label: RiskLabel) -> Self {
        Self {
            similarity_score,
            risk_label,
            entity_preserved: true,
            entity_details: None,
            polarity_flip: false,
            polarity_details: None,
            validation_flags: Vec::new(),
            claim_analysis: None,
            tone_analysis: None,
        }
    }
}

/// Active thresholds and what each label means under them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdReport {
    pub safe_threshold: f64,
    pub risky_threshold: f64,
    pub safe: String,
    pub risky: String,
    pub dangerous: String,
    pub enhanced_checks: Vec<String>,
}
