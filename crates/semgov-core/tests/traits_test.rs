use semgov_core::errors::EmbeddingError;
use semgov_core::traits::{cosine_similarity, IEmbeddingProvider};

/// Returns a fixed vector per text, for exercising the provided `similarity`.
struct TableProvider;

impl IEmbeddingProvider for TableProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match text {
            "x" => Ok(vec![1.0, 0.0]),
            "y" => Ok(vec![0.0, 1.0]),
            "neg-x" => Ok(vec![-1.0, 0.0]),
            "short" => Ok(vec![1.0]),
            "" => Err(EmbeddingError::EmptyText),
            _ => Ok(vec![0.6, 0.8]),
        }
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "table"
    }
}

#[test]
fn identical_vectors_score_exactly_one() {
    let v = vec![0.3f32, 0.1, 0.7, 0.2];
    assert_eq!(cosine_similarity(&v, &v).unwrap(), 1.0);
}

#[test]
fn orthogonal_vectors_score_zero() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
}

#[test]
fn negative_cosine_clamps_to_zero() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap(), 0.0);
}

#[test]
fn zero_vector_scores_zero() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]).unwrap(), 0.0);
}

#[test]
fn mismatched_dimensions_fail() {
    let err = cosine_similarity(&[1.0, 0.0], &[1.0]).unwrap_err();
    assert!(matches!(
        err,
        EmbeddingError::DimensionMismatch {
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn provided_similarity_embeds_both_texts() {
    let p = TableProvider;
    assert_eq!(p.similarity("x", "x").unwrap(), 1.0);
    assert_eq!(p.similarity("x", "y").unwrap(), 0.0);
    assert_eq!(p.similarity("x", "neg-x").unwrap(), 0.0);
    let s = p.similarity("x", "other").unwrap();
    assert!((s - 0.6).abs() < 1e-6);
}

#[test]
fn provided_similarity_propagates_failures() {
    let p = TableProvider;
    assert!(matches!(
        p.similarity("x", ""),
        Err(EmbeddingError::EmptyText)
    ));
    assert!(matches!(
        p.similarity("x", "short"),
        Err(EmbeddingError::DimensionMismatch { .. })
    ));
}

#[test]
fn provider_is_object_safe() {
    let p: Box<dyn IEmbeddingProvider> = Box::new(TableProvider);
    assert_eq!(p.name(), "table");
    assert_eq!(p.dimensions(), 2);
}
