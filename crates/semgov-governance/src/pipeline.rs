//! GovernancePipeline: embeddings provider, semantic validator and decision
//! engine wired together from one config.

use std::sync::Arc;

use semgov_core::config::{SemgovConfig, ThresholdConfig};
use semgov_core::errors::{SemgovError, SemgovResult};
use semgov_core::models::{Decision, GovernanceOutcome, SemanticResult, ThresholdReport};
use semgov_core::traits::IEmbeddingProvider;
use semgov_embeddings::create_provider;
use semgov_observability::{events, fingerprint};
use semgov_validation::{InputValidator, SemanticValidator};
use tracing::info;

use crate::decision::DecisionEngine;

/// Reusable validate-and-decide pipeline. Stateless between calls.
pub struct GovernancePipeline {
    validator: SemanticValidator,
    engine: DecisionEngine,
    input_gate: InputValidator,
}

impl GovernancePipeline {
    /// Build from config, constructing the configured embeddings provider.
    pub fn from_config(config: &SemgovConfig) -> SemgovResult<Self> {
        config.validate()?;
        let provider = create_provider(&config.embedding)?;
        info!(
            provider = provider.name(),
            dimensions = provider.dimensions(),
            safe_threshold = config.thresholds.safe_threshold,
            risky_threshold = config.thresholds.risky_threshold,
            "governance pipeline initialized"
        );
        Self::with_provider(Arc::from(provider), config)
    }

    /// Build from config around an existing provider.
    pub fn with_provider(
        provider: Arc<dyn IEmbeddingProvider>,
        config: &SemgovConfig,
    ) -> SemgovResult<Self> {
        Ok(Self {
            validator: SemanticValidator::new(provider, config.thresholds)?,
            engine: DecisionEngine::new(),
            input_gate: InputValidator::new(config.input.clone()),
        })
    }

    /// Wrap a pre-built validator, e.g. one with swapped sub-validators.
    pub fn from_validator(validator: SemanticValidator, input_gate: InputValidator) -> Self {
        Self {
            validator,
            engine: DecisionEngine::new(),
            input_gate,
        }
    }

    /// Run the input gate on a selection before it is sent for rewriting.
    pub fn check_input(&self, selected_text: &str, intent: &str) -> SemgovResult<()> {
        let checked = self.input_gate.validate(selected_text, intent);
        if let Err(SemgovError::InputRejected { reason }) = &checked {
            events::input_rejected(&fingerprint(selected_text), intent, reason);
        }
        checked
    }

    /// Measure a rewrite without deciding on it.
    pub fn validate(&self, original: &str, proposed: &str) -> SemgovResult<SemanticResult> {
        match self.validator.validate(original, proposed) {
            Ok(result) => {
                events::validation_completed(
                    &fingerprint(original),
                    &fingerprint(proposed),
                    result.similarity_score,
                    &result.risk_label,
                    result.validation_flags.len(),
                );
                Ok(result)
            }
            Err(SemgovError::ValidationError(err)) => {
                events::embedding_failed(self.validator.provider_name(), err.internal_reason());
                Err(SemgovError::ValidationError(err))
            }
            Err(other) => Err(other),
        }
    }

    pub fn decide(&self, result: &SemanticResult) -> Decision {
        let decision = self.engine.decide(result);
        events::decision_made(decision.decision, &result.risk_label, result.similarity_score);
        decision
    }

    /// Validate a rewrite and decide on it.
    pub fn run(&self, original: &str, proposed: &str) -> SemgovResult<GovernanceOutcome> {
        let result = self.validate(original, proposed)?;
        let decision = self.decide(&result);
        Ok(GovernanceOutcome::new(&result, decision))
    }

    pub fn thresholds(&self) -> ThresholdReport {
        self.validator.thresholds()
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }
}

/// One-shot validate-and-decide.
///
/// The `safe_threshold`/`risky_threshold` pair lives in
/// `SemgovConfig { thresholds, .. }`; see
/// [`validate_and_decide_with_thresholds`] to pass only that pair.
///
/// Builds the provider and validators from `config` on every call; hold a
/// [`GovernancePipeline`] for repeated use.
pub fn validate_and_decide(
    original: &str,
    proposed: &str,
    config: &SemgovConfig,
) -> SemgovResult<GovernanceOutcome> {
    GovernancePipeline::from_config(config)?.run(original, proposed)
}

/// One-shot validate-and-decide with default settings except `thresholds`.
pub fn validate_and_decide_with_thresholds(
    original: &str,
    proposed: &str,
    thresholds: ThresholdConfig,
) -> SemgovResult<GovernanceOutcome> {
    let config = SemgovConfig {
        thresholds,
        ..SemgovConfig::default()
    };
    validate_and_decide(original, proposed, &config)
}
