//! Character n-gram placeholder provider.
//!
//! Generates fixed-dimension vectors by hashing characters, bigrams and
//! trigrams into buckets. Not semantically meaningful, but deterministic and
//! offline: identical text always yields the identical vector.

use semgov_core::errors::EmbeddingError;
use semgov_core::traits::IEmbeddingProvider;

const CHAR_WEIGHT: f32 = 1.0;
const BIGRAM_WEIGHT: f32 = 0.5;
const TRIGRAM_WEIGHT: f32 = 0.25;
const POSITION_STRIDE: usize = 7;

/// Deterministic placeholder embedding provider.
pub struct PlaceholderProvider {
    dimensions: usize,
}

impl PlaceholderProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Hash an n-gram into a bucket index using FNV-1a.
    fn hash_gram(gram: &[char], dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for c in gram {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).as_bytes() {
                h ^= *b as u64;
                h = h.wrapping_mul(0x100000001b3);
            }
        }
        (h % dims as u64) as usize
    }

    fn ngram_vector(&self, text: &str) -> Vec<f32> {
        let dims = self.dimensions;
        let chars: Vec<char> = text.trim().to_lowercase().chars().collect();
        let mut vec = vec![0.0f32; dims];

        for (i, c) in chars.iter().enumerate() {
            let idx = (*c as usize).wrapping_add(i.wrapping_mul(POSITION_STRIDE)) % dims;
            vec[idx] += CHAR_WEIGHT;
        }
        for gram in chars.windows(2) {
            vec[Self::hash_gram(gram, dims)] += BIGRAM_WEIGHT;
        }
        for gram in chars.windows(3) {
            vec[Self::hash_gram(gram, dims)] += TRIGRAM_WEIGHT;
        }

        // L2 normalize.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl Default for PlaceholderProvider {
    fn default() -> Self {
        Self::new(semgov_core::config::defaults::DEFAULT_PLACEHOLDER_DIMENSIONS)
    }
}

impl IEmbeddingProvider for PlaceholderProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyText);
        }
        Ok(self.ngram_vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "placeholder"
    }
}
