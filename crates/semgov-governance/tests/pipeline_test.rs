//! End-to-end pipeline behaviour: threshold boundaries, blocking signals,
//! idempotence and error propagation.

use std::sync::Arc;

use semgov_core::config::{SemgovConfig, ThresholdConfig};
use semgov_core::errors::SemgovError;
use semgov_core::models::{DecisionKind, RiskLabel, SemanticResult};
use semgov_governance::{DecisionEngine, GovernancePipeline};
use test_fixtures::{FixedSimilarity, UnavailableProvider};

const ORIGINAL: &str = "The cat sat quietly on the mat.";
const PROPOSED: &str = "The cat rested quietly on the mat.";

fn pipeline(score: f64) -> GovernancePipeline {
    GovernancePipeline::with_provider(Arc::new(FixedSimilarity(score)), &SemgovConfig::default())
        .unwrap()
}

fn label_at(score: f64) -> RiskLabel {
    pipeline(score).run(ORIGINAL, PROPOSED).unwrap().risk_label
}

#[test]
fn threshold_boundaries() {
    let eps = 1e-9;
    assert_eq!(label_at(0.85), RiskLabel::Safe);
    assert_eq!(label_at(0.85 - eps), RiskLabel::Risky);
    assert_eq!(label_at(0.60), RiskLabel::Risky);
    assert_eq!(label_at(0.60 - eps), RiskLabel::Dangerous);
    assert_eq!(label_at(1.0), RiskLabel::Safe);
    assert_eq!(label_at(0.0), RiskLabel::Dangerous);
}

#[test]
fn proceed_versus_abort_is_blocked() {
    let outcome = pipeline(0.95)
        .run("We should proceed with the launch.", "We should abort the launch.")
        .unwrap();
    assert_eq!(outcome.risk_label, RiskLabel::Dangerous);
    assert_eq!(outcome.decision, DecisionKind::Blocked);
    assert!(outcome.polarity_flip);
}

#[test]
fn changed_year_and_percentage_is_blocked() {
    let outcome = pipeline(0.92)
        .run(
            "In 2020, 50% of users reported issues.",
            "In 2021, 60% of users reported issues.",
        )
        .unwrap();
    assert!(!outcome.entity_preserved);
    assert_eq!(outcome.risk_label, RiskLabel::Dangerous);
    assert_eq!(outcome.decision, DecisionKind::Blocked);
}

#[test]
fn changed_spaced_percentage_is_blocked() {
    let outcome = pipeline(0.92)
        .run(
            "Growth was 50 % in the first quarter.",
            "Growth was 60 % in the first quarter.",
        )
        .unwrap();
    assert!(!outcome.entity_preserved);
    assert_eq!(outcome.risk_label, RiskLabel::Dangerous);
    assert_eq!(outcome.decision, DecisionKind::Blocked);
    assert!(outcome
        .validation_flags
        .iter()
        .any(|f| f.contains("50 % → 60 %")));
}

#[test]
fn casual_rewrite_of_a_neutral_sentence_is_allowed() {
    let outcome = pipeline(0.88)
        .run(
            "The board has decided to restructure the division",
            "The board's gonna shake up the division",
        )
        .unwrap();
    assert_eq!(outcome.risk_label, RiskLabel::Safe);
    assert_eq!(outcome.decision, DecisionKind::Allowed);
}

#[test]
fn decision_matrix_is_total() {
    let engine = DecisionEngine::new();
    let cases = [
        (RiskLabel::Safe, DecisionKind::Allowed),
        (RiskLabel::Risky, DecisionKind::AllowedWithWarning),
        (RiskLabel::Dangerous, DecisionKind::Blocked),
        (RiskLabel::from("catastrophic"), DecisionKind::Blocked),
    ];
    for (label, expected) in cases {
        let d = engine.decide(&SemanticResult::from_label(0.5, label.clone()));
        assert_eq!(d.decision, expected, "label {label}");
        assert!(!d.reason.is_empty());
    }
}

#[test]
fn legacy_result_without_enhanced_fields_decides() {
    let result: SemanticResult =
        serde_json::from_str(r#"{"similarity_score": 0.9, "risk_label": "safe"}"#).unwrap();
    assert!(result.entity_preserved);
    assert!(!result.polarity_flip);
    let d = DecisionEngine::new().decide(&result);
    assert_eq!(d.decision, DecisionKind::Allowed);
}

#[test]
fn identical_calls_serialize_identically() {
    let p = pipeline(0.83);
    let original = "Since 2015 the clinic has treated 4000 patients (Ortiz, 2021).";
    let proposed = "The clinic has treated 4000 patients since 2015, experts say.";
    let a = serde_json::to_string(&p.validate(original, proposed).unwrap()).unwrap();
    let b = serde_json::to_string(&p.validate(original, proposed).unwrap()).unwrap();
    assert_eq!(a, b);

    let oa = serde_json::to_string(&p.run(original, proposed).unwrap()).unwrap();
    let ob = serde_json::to_string(&p.run(original, proposed).unwrap()).unwrap();
    assert_eq!(oa, ob);
}

#[test]
fn embedding_failure_is_an_error_not_a_decision() {
    let p = GovernancePipeline::with_provider(Arc::new(UnavailableProvider), &SemgovConfig::default())
        .unwrap();
    let err = p.run(ORIGINAL, PROPOSED).unwrap_err();
    assert!(matches!(err, SemgovError::ValidationError(_)));
    assert_eq!(err.to_string(), "Failed to compute semantic similarity");
}

#[test]
fn custom_thresholds_from_toml() {
    let config = SemgovConfig::from_toml(
        r#"
        [thresholds]
        safe_threshold = 0.9
        risky_threshold = 0.7
        "#,
    )
    .unwrap();
    let p = GovernancePipeline::with_provider(Arc::new(FixedSimilarity(0.88)), &config).unwrap();
    let outcome = p.run(ORIGINAL, PROPOSED).unwrap();
    assert_eq!(outcome.risk_label, RiskLabel::Risky);
    assert_eq!(outcome.decision, DecisionKind::AllowedWithWarning);

    let report = p.thresholds();
    assert_eq!(report.safe_threshold, 0.9);
    assert_eq!(report.risky_threshold, 0.7);
}

#[test]
fn invalid_thresholds_are_rejected() {
    let config = SemgovConfig {
        thresholds: ThresholdConfig {
            safe_threshold: 0.6,
            risky_threshold: 0.6,
        },
        ..SemgovConfig::default()
    };
    assert!(GovernancePipeline::with_provider(Arc::new(FixedSimilarity(0.9)), &config).is_err());
}
