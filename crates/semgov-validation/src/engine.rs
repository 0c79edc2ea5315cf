//! SemanticValidator: runs embedding similarity and the pair validators,
//! collects flags and classifies the rewrite.

use std::sync::Arc;

use semgov_core::config::ThresholdConfig;
use semgov_core::constants::round_score;
use semgov_core::errors::{InputField, SemgovError, SemgovResult, ValidationError};
use semgov_core::models::{
    ClaimValidationResult, EntityValidationResult, PolarityAnalysis, RiskLabel, RiskLevel,
    SemanticResult, ThresholdReport, ToneValidationResult,
};
use semgov_core::traits::{IEmbeddingProvider, IPairValidator};
use tracing::{debug, warn};

use crate::validators::{ClaimValidator, EntityValidator, PolarityDetector, ToneAnalyzer};

const MAX_MISSING_IN_FLAG: usize = 3;
const MAX_NUMBER_CHANGES_IN_FLAG: usize = 2;
const MAX_ADDED_IN_FLAG: usize = 3;

type EntityCheck = Box<dyn IPairValidator<Output = EntityValidationResult>>;
type ClaimCheck = Box<dyn IPairValidator<Output = ClaimValidationResult>>;
type ToneCheck = Box<dyn IPairValidator<Output = ToneValidationResult>>;
type PolarityCheck = Box<dyn IPairValidator<Output = PolarityAnalysis>>;

/// Compares an original passage with a proposed rewrite.
///
/// Holds no per-request state; one instance can serve concurrent callers.
pub struct SemanticValidator {
    embeddings: Arc<dyn IEmbeddingProvider>,
    thresholds: ThresholdConfig,
    entity: EntityCheck,
    claim: ClaimCheck,
    tone: ToneCheck,
    polarity: PolarityCheck,
}

impl SemanticValidator {
    /// Build with the default validators. Fails on an invalid threshold pair.
    pub fn new(
        embeddings: Arc<dyn IEmbeddingProvider>,
        thresholds: ThresholdConfig,
    ) -> SemgovResult<Self> {
        thresholds.validate()?;
        Ok(Self {
            embeddings,
            thresholds,
            entity: Box::new(EntityValidator::new()),
            claim: Box::new(ClaimValidator::new()),
            tone: Box::new(ToneAnalyzer::new()),
            polarity: Box::new(PolarityDetector::new()),
        })
    }

    pub fn with_entity_validator(
        mut self,
        validator: impl IPairValidator<Output = EntityValidationResult> + 'static,
    ) -> Self {
        self.entity = Box::new(validator);
        self
    }

    pub fn with_claim_validator(
        mut self,
        validator: impl IPairValidator<Output = ClaimValidationResult> + 'static,
    ) -> Self {
        self.claim = Box::new(validator);
        self
    }

    pub fn with_tone_validator(
        mut self,
        validator: impl IPairValidator<Output = ToneValidationResult> + 'static,
    ) -> Self {
        self.tone = Box::new(validator);
        self
    }

    pub fn with_polarity_detector(
        mut self,
        detector: impl IPairValidator<Output = PolarityAnalysis> + 'static,
    ) -> Self {
        self.polarity = Box::new(detector);
        self
    }

    pub fn thresholds_config(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    pub fn provider_name(&self) -> &str {
        self.embeddings.name()
    }

    /// Validate a rewrite.
    ///
    /// Both texts must contain non-whitespace content. An embedding failure
    /// aborts with a user-safe [`ValidationError`]; the sub-validators never
    /// fail.
    pub fn validate(&self, original: &str, proposed: &str) -> SemgovResult<SemanticResult> {
        if original.trim().is_empty() {
            return Err(SemgovError::EmptyInput {
                field: InputField::Original,
            });
        }
        if proposed.trim().is_empty() {
            return Err(SemgovError::EmptyInput {
                field: InputField::Proposed,
            });
        }

        let score = self.embeddings.similarity(original, proposed).map_err(|e| {
            let err = ValidationError::from(e);
            warn!(
                provider = self.embeddings.name(),
                reason = err.internal_reason(),
                "similarity computation failed"
            );
            err
        })?;

        let mut flags = Vec::new();

        let entity = self.entity.validate(original, proposed);
        entity_flags(&entity, &mut flags);

        let polarity = self.polarity.validate(original, proposed);
        polarity_flags(&polarity, &mut flags);

        let claims = self.claim.validate(original, proposed);
        claim_flags(&claims, &mut flags);

        let tone = self.tone.validate(original, proposed);
        tone_flags(&tone, &mut flags);

        let polarity_flip = polarity.is_flip();
        let risk_label = classify(score, entity.preserved, polarity_flip, &self.thresholds);

        debug!(
            score,
            label = risk_label.as_str(),
            entity_preserved = entity.preserved,
            polarity_flip,
            flags = flags.len(),
            "semantic validation finished"
        );

        Ok(SemanticResult {
            similarity_score: round_score(score),
            risk_label,
            entity_preserved: entity.preserved,
            entity_details: Some(entity),
            polarity_flip,
            polarity_details: Some(polarity),
            validation_flags: flags,
            claim_analysis: Some(claims),
            tone_analysis: Some(tone),
        })
    }

    /// Active thresholds and the rule behind each label.
    pub fn thresholds(&self) -> ThresholdReport {
        let safe = self.thresholds.safe_threshold;
        let risky = self.thresholds.risky_threshold;
        ThresholdReport {
            safe_threshold: safe,
            risky_threshold: risky,
            safe: format!("similarity >= {safe} AND entities preserved AND no polarity flip"),
            risky: format!("{risky} <= similarity < {safe}"),
            dangerous: format!(
                "similarity < {risky} OR polarity flip OR entity drift at similarity >= {safe}"
            ),
            enhanced_checks: vec![
                self.entity.name().to_string(),
                self.polarity.name().to_string(),
                self.claim.name().to_string(),
                self.tone.name().to_string(),
            ],
        }
    }
}

/// Map a raw similarity score and the blocking signals onto a risk label.
/// First match wins: polarity flip, entity drift above the safe threshold,
/// then the plain thresholds.
pub fn classify(
    score: f64,
    entity_preserved: bool,
    polarity_flip: bool,
    thresholds: &ThresholdConfig,
) -> RiskLabel {
    if polarity_flip {
        RiskLabel::Dangerous
    } else if score >= thresholds.safe_threshold {
        if entity_preserved {
            RiskLabel::Safe
        } else {
            RiskLabel::Dangerous
        }
    } else if score >= thresholds.risky_threshold {
        RiskLabel::Risky
    } else {
        RiskLabel::Dangerous
    }
}

fn entity_flags(entity: &EntityValidationResult, flags: &mut Vec<String>) {
    if entity.preserved {
        return;
    }
    if !entity.missing.is_empty() {
        let shown: Vec<&str> = entity
            .missing
            .iter()
            .take(MAX_MISSING_IN_FLAG)
            .map(String::as_str)
            .collect();
        flags.push(format!("Missing entities: {}", shown.join(", ")));
    }
    for change in entity.changed_numbers.iter().take(MAX_NUMBER_CHANGES_IN_FLAG) {
        flags.push(format!("Number changed: {} → {}", change.original, change.proposed));
    }
    if entity.risk_level == RiskLevel::Low {
        let shown: Vec<&str> = entity
            .added
            .iter()
            .take(MAX_ADDED_IN_FLAG)
            .map(String::as_str)
            .collect();
        flags.push(format!(
            "Added entities: {} new ({})",
            entity.added.len(),
            shown.join(", ")
        ));
    }
}

fn polarity_flags(polarity: &PolarityAnalysis, flags: &mut Vec<String>) {
    if polarity.negation_flip() {
        flags.push("Polarity reversal detected (negation changed)".to_string());
    }
    for pair in &polarity.reversed_pairs {
        flags.push(format!(
            "Polarity reversal detected ({} → {})",
            pair.original, pair.proposed
        ));
    }
}

fn claim_flags(claims: &ClaimValidationResult, flags: &mut Vec<String>) {
    if claims.uncited_count > 0 {
        flags.push(format!("Uncited claims: {} detected", claims.uncited_count));
    } else if claims.citation_count < claims.original_citation_count {
        flags.push(format!(
            "Citations removed: {} → {}",
            claims.original_citation_count, claims.citation_count
        ));
    }
}

fn tone_flags(tone: &ToneValidationResult, flags: &mut Vec<String>) {
    if !tone.preserved {
        flags.push(format!("Tone shift: {} → {}", tone.original_tone, tone.proposed_tone));
    } else if tone.risk_level == RiskLevel::High {
        flags.push(format!(
            "Tone casualized: {} text, formality shift {:.2}",
            tone.original_tone, tone.formality_shift
        ));
    }
}
