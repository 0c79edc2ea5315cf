use serde::{Deserialize, Serialize};

use super::{Decision, DecisionKind, RiskLabel, SemanticResult};

/// Flattened result of one validate-and-decide call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceOutcome {
    pub similarity_score: f64,
    pub risk_label: RiskLabel,
    pub entity_preserved: bool,
    pub polarity_flip: bool,
    pub validation_flags: Vec<String>,
    pub decision: DecisionKind,
    pub decision_reason: String,
}

impl GovernanceOutcome {
    pub fn new(result: &SemanticResult, decision: Decision) -> Self {
        Self {
            similarity_score: result.similarity_score,
            risk_label: result.risk_label.clone(),
            entity_preserved: result.entity_preserved,
            polarity_flip: result.polarity_flip,
            validation_flags: result.validation_flags.clone(),
            decision: decision.decision,
            decision_reason: decision.reason,
        }
    }
}
