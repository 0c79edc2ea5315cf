//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields. None of
//! them accept raw text.

use semgov_core::models::{DecisionKind, RiskLabel};

use crate::fingerprint::TextFingerprint;

/// Log a completed semantic validation.
pub fn validation_completed(
    original: &TextFingerprint,
    proposed: &TextFingerprint,
    similarity: f64,
    risk_label: &RiskLabel,
    flags: usize,
) {
    tracing::info!(
        event = "validation_completed",
        original = %original,
        proposed = %proposed,
        similarity = similarity,
        risk_label = %risk_label,
        flags = flags,
        "semantic validation completed"
    );
}

/// Log a governance decision.
pub fn decision_made(decision: DecisionKind, risk_label: &RiskLabel, similarity: f64) {
    tracing::info!(
        event = "decision_made",
        decision = decision.as_str(),
        risk_label = %risk_label,
        similarity = similarity,
        "decision made"
    );
}

/// Log an embedding failure. `reason` is internal detail and stays in logs.
pub fn embedding_failed(provider: &str, reason: &str) {
    tracing::warn!(
        event = "embedding_failed",
        provider = %provider,
        reason = %reason,
        "embedding failed"
    );
}

/// Log a selection rejected by the input gate.
pub fn input_rejected(text: &TextFingerprint, intent: &str, reason: &str) {
    tracing::info!(
        event = "input_rejected",
        text = %text,
        intent = %intent,
        reason = %reason,
        "input rejected"
    );
}
