use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semgov_embeddings::{IEmbeddingProvider, PlaceholderProvider};

const ORIGINAL: &str = "In 2020, 50% of users reported that the new onboarding flow \
    reduced setup time. The board has decided to restructure the division.";
const PROPOSED: &str = "In 2020, half of all users said the new onboarding flow cut \
    setup time. The board has chosen to reorganize the division.";

fn bench_placeholder(c: &mut Criterion) {
    let provider = PlaceholderProvider::default();

    c.bench_function("placeholder_embed", |b| {
        b.iter(|| provider.embed(black_box(ORIGINAL)).unwrap())
    });

    c.bench_function("placeholder_similarity", |b| {
        b.iter(|| {
            provider
                .similarity(black_box(ORIGINAL), black_box(PROPOSED))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_placeholder);
criterion_main!(benches);
