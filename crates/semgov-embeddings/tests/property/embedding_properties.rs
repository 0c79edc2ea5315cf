use proptest::prelude::*;
use semgov_embeddings::{IEmbeddingProvider, PlaceholderProvider};

proptest! {
    #[test]
    fn self_similarity_is_one(s in "\\PC{1,200}") {
        prop_assume!(!s.trim().is_empty());
        let p = PlaceholderProvider::default();
        prop_assert_eq!(p.similarity(&s, &s).unwrap(), 1.0);
    }

    #[test]
    fn similarity_is_bounded(a in "\\PC{1,150}", b in "\\PC{1,150}") {
        prop_assume!(!a.trim().is_empty() && !b.trim().is_empty());
        let p = PlaceholderProvider::default();
        let s = p.similarity(&a, &b).unwrap();
        prop_assert!((0.0..=1.0).contains(&s), "similarity out of range: {}", s);
    }

    #[test]
    fn similarity_is_symmetric(a in "[a-zA-Z ,.]{1,120}", b in "[a-zA-Z ,.]{1,120}") {
        prop_assume!(!a.trim().is_empty() && !b.trim().is_empty());
        let p = PlaceholderProvider::default();
        let ab = p.similarity(&a, &b).unwrap();
        let ba = p.similarity(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn embedding_length_matches_dimensions(s in "\\PC{1,100}", dims in 1usize..512) {
        prop_assume!(!s.trim().is_empty());
        let p = PlaceholderProvider::new(dims);
        prop_assert_eq!(p.embed(&s).unwrap().len(), dims);
    }
}
