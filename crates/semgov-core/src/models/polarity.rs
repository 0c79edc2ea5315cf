use serde::{Deserialize, Serialize};

/// An opposing word pair where each text used a different side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversedPair {
    pub original: String,
    pub proposed: String,
}

/// Polarity comparison of two texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityAnalysis {
    pub original_negated: bool,
    pub proposed_negated: bool,
    /// Whole-word negations counted in the original.
    pub original_negations: usize,
    /// Whole-word negations counted in the proposal.
    pub proposed_negations: usize,
    #[serde(default)]
    pub reversed_pairs: Vec<ReversedPair>,
}

impl PolarityAnalysis {
    /// Negation status differs between the two texts.
    pub fn negation_flip(&self) -> bool {
        self.original_negated != self.proposed_negated
    }

    /// Either signal reports a reversal of meaning.
    pub fn is_flip(&self) -> bool {
        self.negation_flip() || !self.reversed_pairs.is_empty()
    }
}
