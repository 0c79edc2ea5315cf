//! Property tests: every validator is total and deterministic on arbitrary text.

use std::sync::Arc;

use proptest::prelude::*;
use semgov_core::config::ThresholdConfig;
use semgov_core::errors::SemgovError;
use semgov_core::traits::IPairValidator;
use semgov_embeddings::PlaceholderProvider;
use semgov_validation::{
    ClaimValidator, EntityValidator, InputValidator, PolarityDetector, SemanticValidator,
    ToneAnalyzer,
};

fn validator() -> SemanticValidator {
    SemanticValidator::new(Arc::new(PlaceholderProvider::default()), ThresholdConfig::default())
        .unwrap()
}

proptest! {
    #[test]
    fn pair_validators_never_panic(a in "\\PC{0,200}", b in "\\PC{0,200}") {
        let _ = EntityValidator::new().validate(&a, &b);
        let _ = ClaimValidator::new().validate(&a, &b);
        let _ = ToneAnalyzer::new().validate(&a, &b);
        let _ = PolarityDetector::new().validate(&a, &b);
    }

    #[test]
    fn tone_scores_stay_in_range(text in "\\PC{0,300}") {
        let r = ToneAnalyzer::new().analyze(&text);
        prop_assert!((0.0..=1.0).contains(&r.formality_score));
        prop_assert!((0.0..=1.0).contains(&r.confidence));
    }

    #[test]
    fn claim_spans_are_ordered_and_disjoint(text in "[a-zA-Z0-9%. ]{0,300}") {
        let claims = ClaimValidator::new().extract_claims(&text);
        for pair in claims.windows(2) {
            prop_assert!(pair[0].end_pos <= pair[1].start_pos);
        }
    }

    #[test]
    fn semantic_validation_is_deterministic(a in "[a-zA-Z ,.']{1,120}", b in "[a-zA-Z ,.']{1,120}") {
        prop_assume!(!a.trim().is_empty() && !b.trim().is_empty());
        let v = validator();
        let first = v.validate(&a, &b).unwrap();
        let second = v.validate(&a, &b).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn score_is_always_in_unit_range(a in "\\PC{1,120}", b in "\\PC{1,120}") {
        prop_assume!(!a.trim().is_empty() && !b.trim().is_empty());
        let r = validator().validate(&a, &b).unwrap();
        prop_assert!((0.0..=1.0).contains(&r.similarity_score));
    }

    #[test]
    fn input_gate_only_rejects_with_input_rejected(text in "\\PC{0,400}", intent in "[a-z]{0,10}") {
        match InputValidator::default().validate(&text, &intent) {
            Ok(()) | Err(SemgovError::InputRejected { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }
}
