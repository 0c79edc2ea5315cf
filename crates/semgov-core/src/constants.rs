/// Decimal places kept on the similarity score handed to callers.
pub const SIMILARITY_DECIMALS: i32 = 3;

/// Similarity at or above which entity drift blocks regardless of risk label.
pub const ENTITY_DRIFT_BLOCK_SCORE: f64 = 0.80;

/// Maximum number of uncited claims reported back in a result.
pub const MAX_REPORTED_UNCITED_CLAIMS: usize = 5;

/// Intents accepted by the input gate.
pub const ALLOWED_INTENTS: &[&str] = &["rewrite", "humanize", "clarify"];

/// Round a score to [`SIMILARITY_DECIMALS`] places.
pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SIMILARITY_DECIMALS);
    (score * factor).round() / factor
}
