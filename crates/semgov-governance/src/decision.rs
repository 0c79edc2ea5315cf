//! DecisionEngine: maps a SemanticResult onto allowed, allowed_with_warning
//! or blocked.
//!
//! The engine never sees raw text or embeddings. Rules are checked in
//! priority order and the first match wins:
//!
//! | Condition                                   | Decision             |
//! |---------------------------------------------|----------------------|
//! | polarity flip                               | blocked              |
//! | entities not preserved, similarity >= 0.80  | blocked              |
//! | safe                                        | allowed              |
//! | risky                                       | allowed_with_warning |
//! | dangerous                                   | blocked              |
//! | any other label                             | blocked              |

use semgov_core::constants::ENTITY_DRIFT_BLOCK_SCORE;
use semgov_core::models::{Decision, DecisionKind, RiskLabel, SemanticResult};

const FLAGS_QUOTED: usize = 2;

/// Stateless rule engine. Same input, same decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn decide(&self, result: &SemanticResult) -> Decision {
        let score = result.similarity_score;
        let pct = percent(score);
        let flags = &result.validation_flags;

        if result.polarity_flip {
            return Decision::new(
                DecisionKind::Blocked,
                format!(
                    "The proposed text reverses the meaning ({}). \
                     This could fundamentally alter your intent. Proposal blocked.",
                    reversal_cause(result)
                ),
            );
        }

        if !result.entity_preserved && score >= ENTITY_DRIFT_BLOCK_SCORE {
            let detail = if flags.is_empty() {
                "Entity changes detected".to_string()
            } else {
                quote_flags(flags)
            };
            return Decision::new(
                DecisionKind::Blocked,
                format!(
                    "Factual content changed despite high similarity ({pct}). {detail}. \
                     Proposal blocked to prevent factual drift."
                ),
            );
        }

        match &result.risk_label {
            RiskLabel::Safe => Decision::new(
                DecisionKind::Allowed,
                format!("Semantic similarity ({pct}) indicates meaning is preserved."),
            ),
            RiskLabel::Risky => {
                let note = flags
                    .first()
                    .map(|flag| format!(" Note: {flag}"))
                    .unwrap_or_default();
                Decision::new(
                    DecisionKind::AllowedWithWarning,
                    format!(
                        "Semantic similarity ({pct}) is marginal. \
                         Please review carefully to ensure meaning is preserved.{note}"
                    ),
                )
            }
            RiskLabel::Dangerous => {
                let issues = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" Issues: {}", quote_flags(flags))
                };
                Decision::new(
                    DecisionKind::Blocked,
                    format!(
                        "Semantic similarity ({pct}) is too low.{issues} \
                         The proposed text may significantly alter the original meaning. \
                         This proposal has been blocked to protect content integrity."
                    ),
                )
            }
            RiskLabel::Unrecognized(label) => Decision::new(
                DecisionKind::Blocked,
                format!("Unknown risk label: {label}. Blocking for safety."),
            ),
        }
    }

    /// The proposal may be shown, with or without a warning.
    pub fn is_allowed(&self, decision: &Decision) -> bool {
        matches!(
            decision.decision,
            DecisionKind::Allowed | DecisionKind::AllowedWithWarning
        )
    }

    pub fn is_blocked(&self, decision: &Decision) -> bool {
        decision.decision == DecisionKind::Blocked
    }

    pub fn requires_warning(&self, decision: &Decision) -> bool {
        decision.decision == DecisionKind::AllowedWithWarning
    }
}

fn percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

fn quote_flags(flags: &[String]) -> String {
    flags
        .iter()
        .take(FLAGS_QUOTED)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

fn reversal_cause(result: &SemanticResult) -> String {
    match &result.polarity_details {
        Some(details) if !details.negation_flip() => match details.reversed_pairs.first() {
            Some(pair) => format!("{} → {}", pair.original, pair.proposed),
            None => "negation changed".to_string(),
        },
        _ => "negation changed".to_string(),
    }
}
