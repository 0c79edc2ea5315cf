//! # semgov-embeddings
//!
//! Embedding providers used to measure how close a rewrite stays to its
//! original. Embeddings are ephemeral measurements: nothing is cached,
//! persisted or trained.
//!
//! ## Providers
//! - **PlaceholderProvider**: deterministic character n-gram hashing, offline
//! - **ApiProvider**: OpenAI-compatible `/v1/embeddings` endpoint

pub mod providers;

pub use providers::{create_provider, ApiProvider, PlaceholderProvider};
pub use semgov_core::traits::{cosine_similarity, IEmbeddingProvider};
