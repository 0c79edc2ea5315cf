//! Tone analysis and tone-preservation checks.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use semgov_core::errors::ConfigError;
use semgov_core::models::{RiskLevel, Tone, ToneAnalysisResult, ToneValidationResult};
use semgov_core::traits::IPairValidator;

use crate::patterns::{compile_all, compile_static, count_matches};

/// Texts shorter than this (in chars) are never classified.
const MIN_CLASSIFIABLE_CHARS: usize = 20;
/// The dominant family needs at least this many hits.
const MIN_DOMINANT_COUNT: u32 = 2;
const MAX_CONFIDENCE: f64 = 0.95;

/// A tone change only breaks preservation past this formality shift.
const PRESERVATION_SHIFT: f64 = 0.25;
const TONE_CHANGE_SHIFT: f64 = 0.15;
const LARGE_SHIFT: f64 = 0.30;

const FORMAL: &[&str] = &[
    r"\b(?:therefore|furthermore|moreover|consequently|subsequently)\b",
    r"\b(?:shall|hereby|pursuant|notwithstanding|whereas)\b",
    r"\b(?:it\s+is\s+(?:evident|clear|apparent|notable))\b",
    r"\b(?:one\s+(?:must|should|may|might))\b",
    r"\b(?:the\s+(?:aforementioned|above-mentioned|undersigned))\b",
];

const CASUAL: &[&str] = &[
    r"\b(?:gonna|wanna|gotta|kinda|sorta)\b",
    r"\b(?:yeah|yep|nope|okay|ok)\b",
    r"\b(?:like|literally|basically|actually|honestly)\b",
    r"\b(?:stuff|things|guy|guys|cool|awesome)\b",
    r"(?:n't|'ll|'ve|'re|'d)\b",
    r"!{2,}",
    r"\b(?:lol|omg|btw|imo|tbh)\b",
];

const ACADEMIC: &[&str] = &[
    r"\b(?:hypothesis|methodology|empirical|theoretical)\b",
    r"\b(?:furthermore|thus|hence|accordingly)\b",
    r"\b(?:significant(?:ly)?|considerable|substantial)\b",
    r"\b(?:findings|results|analysis|conclusion)\b",
    r"\([A-Z][a-z]+,?\s*\d{4}\)",
    r"\b(?:it\s+(?:appears|seems|suggests)\s+that)\b",
];

const PROFESSIONAL: &[&str] = &[
    r"\b(?:implement|execute|deliver|optimize|leverage)\b",
    r"\b(?:stakeholder|initiative|strategy|objective)\b",
    r"\b(?:moving\s+forward|going\s+forward|at\s+this\s+time)\b",
    r"\b(?:please\s+(?:note|see|find|review))\b",
    r"\b(?:best\s+(?:practices|regards)|kind\s+regards)\b",
];

static DEFAULT_INDICATORS: LazyLock<ToneIndicators> = LazyLock::new(|| ToneIndicators {
    families: vec![
        (Tone::Formal, compile_static(FORMAL, true)),
        (Tone::Casual, compile_static(CASUAL, true)),
        (Tone::Academic, compile_static(ACADEMIC, true)),
        (Tone::Professional, compile_static(PROFESSIONAL, true)),
    ],
    contractions: Regex::new(r"(?:n't|'ll|'ve|'re|'d|'s)\b").unwrap(),
    passive: Regex::new(r"\b(?:is|are|was|were|been|being)\s+\w+ed\b").unwrap(),
});

/// Indicator tables for tone detection.
#[derive(Debug, Clone)]
pub struct ToneIndicators {
    /// Patterns per tone family, matched case-insensitively on lowercased text.
    pub families: Vec<(Tone, Vec<Regex>)>,
    /// Lowers formality. Matched on the text as written.
    pub contractions: Regex,
    /// Raises formality. Matched on the text as written.
    pub passive: Regex,
}

impl ToneIndicators {
    /// Compile custom family tables, keeping the default contraction and
    /// passive-voice patterns.
    pub fn compile(families: &[(Tone, &[&str])]) -> Result<Self, ConfigError> {
        let families = families
            .iter()
            .map(|(tone, sources)| Ok((*tone, compile_all(sources, true)?)))
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self {
            families,
            ..Self::default()
        })
    }
}

impl Default for ToneIndicators {
    fn default() -> Self {
        DEFAULT_INDICATORS.clone()
    }
}

/// Classifies tone and scores formality on a 0 (casual) to 1 (formal) scale.
#[derive(Debug, Clone, Default)]
pub struct ToneAnalyzer {
    indicators: ToneIndicators,
}

impl ToneAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indicators(indicators: ToneIndicators) -> Self {
        Self { indicators }
    }

    pub fn analyze(&self, text: &str) -> ToneAnalysisResult {
        if text.trim().is_empty() {
            return ToneAnalysisResult::empty();
        }

        let lower = text.to_lowercase();
        let mut indicators = BTreeMap::new();
        for (tone, patterns) in &self.indicators.families {
            *indicators.entry(*tone).or_insert(0) += count_matches(patterns, &lower) as u32;
        }

        let formality_score = self.formality(text, &indicators);
        let (detected_tone, confidence) = dominant_tone(&indicators, text.chars().count());

        ToneAnalysisResult {
            detected_tone,
            confidence,
            formality_score,
            indicators,
        }
    }

    fn formality(&self, text: &str, indicators: &BTreeMap<Tone, u32>) -> f64 {
        let count = |tone: Tone| f64::from(indicators.get(&tone).copied().unwrap_or(0));
        let contractions = self.indicators.contractions.find_iter(text).count() as f64;
        let passive = self.indicators.passive.find_iter(text).count() as f64;

        let score = 0.5 + count(Tone::Formal) * 0.10
            + count(Tone::Academic) * 0.08
            + count(Tone::Professional) * 0.05
            - count(Tone::Casual) * 0.12
            - contractions * 0.03
            + passive * 0.02;
        score.clamp(0.0, 1.0)
    }
}

/// Dominant tone and confidence. Ties go to the family declared first in
/// [`Tone::FAMILIES`].
fn dominant_tone(indicators: &BTreeMap<Tone, u32>, text_chars: usize) -> (Tone, f64) {
    if text_chars < MIN_CLASSIFIABLE_CHARS {
        return (Tone::Neutral, 0.3);
    }
    let total: u32 = indicators.values().sum();
    if total == 0 {
        return (Tone::Neutral, 0.5);
    }

    let mut top = (Tone::Neutral, 0);
    for tone in Tone::FAMILIES {
        let count = indicators.get(&tone).copied().unwrap_or(0);
        if count > top.1 {
            top = (tone, count);
        }
    }
    if top.1 < MIN_DOMINANT_COUNT {
        return (Tone::Neutral, 0.4);
    }

    let confidence = (f64::from(top.1) / f64::from(total) * 0.7 + 0.3).min(MAX_CONFIDENCE);
    (top.0, confidence)
}

impl IPairValidator for ToneAnalyzer {
    type Output = ToneValidationResult;

    fn validate(&self, original: &str, proposed: &str) -> ToneValidationResult {
        let orig = self.analyze(original);
        let prop = self.analyze(proposed);

        let shift = prop.formality_score - orig.formality_score;
        let tone_changed = orig.detected_tone != prop.detected_tone;
        let preserved = !(tone_changed && shift.abs() > PRESERVATION_SHIFT);

        let casualized = matches!(orig.detected_tone, Tone::Formal | Tone::Academic)
            && shift < -PRESERVATION_SHIFT;
        let risk_level = if casualized {
            RiskLevel::High
        } else if (tone_changed && shift.abs() > TONE_CHANGE_SHIFT) || shift.abs() > LARGE_SHIFT {
            RiskLevel::Low
        } else {
            RiskLevel::None
        };

        ToneValidationResult {
            preserved,
            original_tone: orig.detected_tone,
            proposed_tone: prop.detected_tone,
            formality_shift: shift,
            risk_level,
        }
    }

    fn name(&self) -> &str {
        "tone"
    }
}
