use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Tone category. The first four double as indicator families; their
/// declaration order is the tie-break order for the dominant tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Formal,
    Casual,
    Academic,
    Professional,
    #[default]
    Neutral,
}

impl Tone {
    /// The four tones backed by indicator patterns.
    pub const FAMILIES: [Tone; 4] = [Tone::Formal, Tone::Casual, Tone::Academic, Tone::Professional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Academic => "academic",
            Self::Professional => "professional",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone analysis of a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneAnalysisResult {
    pub detected_tone: Tone,
    /// 0.0–1.0.
    pub confidence: f64,
    /// 0.0 (casual) to 1.0 (formal).
    pub formality_score: f64,
    /// Indicator match counts per family.
    pub indicators: BTreeMap<Tone, u32>,
}

impl ToneAnalysisResult {
    /// Result for empty or whitespace-only text.
    pub fn empty() -> Self {
        Self {
            detected_tone: Tone::Neutral,
            confidence: 0.0,
            formality_score: 0.5,
            indicators: BTreeMap::new(),
        }
    }
}

/// Tone preservation between an original and a proposed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneValidationResult {
    pub preserved: bool,
    pub original_tone: Tone,
    pub proposed_tone: Tone,
    /// Negative = more casual, positive = more formal.
    pub formality_shift: f64,
    pub risk_level: RiskLevel,
}

impl Default for ToneValidationResult {
    fn default() -> Self {
        Self {
            preserved: true,
            original_tone: Tone::Neutral,
            proposed_tone: Tone::Neutral,
            formality_shift: 0.0,
            risk_level: RiskLevel::None,
        }
    }
}
