use crate::errors::EmbeddingError;

/// Embedding generation provider.
///
/// Every call is a fresh measurement: implementations do not cache, persist
/// or adapt vectors.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text. Empty or whitespace-only text is an error.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Cosine similarity of two texts in [0, 1].
    ///
    /// Both texts go through this same provider; the two embed calls run
    /// concurrently and both must succeed.
    fn similarity(&self, a: &str, b: &str) -> Result<f64, EmbeddingError> {
        let (emb_a, emb_b) = rayon::join(|| self.embed(a), || self.embed(b));
        cosine_similarity(&emb_a?, &emb_b?)
    }
}

/// Cosine similarity clamped to [0, 1].
///
/// Negative cosine is treated as unrelated (0.0): the pipeline only asks
/// whether meaning was kept, not whether it was inverted. Zero-magnitude
/// vectors score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    // sqrt of the product keeps identical vectors at exactly 1.0.
    let similarity = dot / (norm_a * norm_b).sqrt();
    Ok(similarity.clamp(0.0, 1.0))
}
