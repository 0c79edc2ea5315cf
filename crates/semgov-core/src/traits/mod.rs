mod embedding;
mod pair_validator;

pub use embedding::{cosine_similarity, IEmbeddingProvider};
pub use pair_validator::IPairValidator;
