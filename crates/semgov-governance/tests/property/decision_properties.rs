//! Property tests for the decision engine.

use proptest::prelude::*;
use semgov_core::models::{DecisionKind, RiskLabel, SemanticResult};
use semgov_governance::DecisionEngine;

fn label() -> impl Strategy<Value = RiskLabel> {
    prop_oneof![
        Just(RiskLabel::Safe),
        Just(RiskLabel::Risky),
        Just(RiskLabel::Dangerous),
        "[a-z]{1,12}".prop_map(RiskLabel::from),
    ]
}

proptest! {
    #[test]
    fn decisions_are_deterministic(
        score in 0.0f64..=1.0,
        label in label(),
        entity_preserved in any::<bool>(),
        polarity_flip in any::<bool>(),
        flags in proptest::collection::vec("[ -~]{0,40}", 0..4),
    ) {
        let mut result = SemanticResult::from_label(score, label);
        result.entity_preserved = entity_preserved;
        result.polarity_flip = polarity_flip;
        result.validation_flags = flags;

        let engine = DecisionEngine::new();
        let first = engine.decide(&result);
        prop_assert_eq!(&first, &engine.decide(&result));
        prop_assert!(!first.reason.is_empty());
        prop_assert_eq!(engine.is_allowed(&first), !engine.is_blocked(&first));
    }

    #[test]
    fn polarity_flip_always_blocks(score in 0.0f64..=1.0, label in label()) {
        let mut result = SemanticResult::from_label(score, label);
        result.polarity_flip = true;
        prop_assert_eq!(DecisionEngine::new().decide(&result).decision, DecisionKind::Blocked);
    }

    #[test]
    fn dangerous_and_unknown_labels_never_allow(score in 0.0f64..=1.0, name in "[a-z]{1,12}") {
        let engine = DecisionEngine::new();
        let dangerous = SemanticResult::from_label(score, RiskLabel::Dangerous);
        prop_assert!(engine.is_blocked(&engine.decide(&dangerous)));

        let label = RiskLabel::from(name.as_str());
        let blocked = !matches!(label, RiskLabel::Safe | RiskLabel::Risky);
        let decision = engine.decide(&SemanticResult::from_label(score, label));
        if blocked {
            prop_assert!(engine.is_blocked(&decision));
        }
    }
}
