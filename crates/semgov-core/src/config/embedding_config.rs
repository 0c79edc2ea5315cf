use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "placeholder" or "api".
    pub provider: String,
    /// Vector size for the placeholder provider.
    pub dimensions: usize,
    /// Model name sent to the API provider.
    pub model: String,
    /// Embeddings endpoint for the API provider.
    pub endpoint: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Optional per-request timeout imposed by the caller.
    pub request_timeout_secs: Option<u64>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_PLACEHOLDER_DIMENSIONS,
            model: defaults::DEFAULT_API_MODEL.to_string(),
            endpoint: defaults::DEFAULT_API_ENDPOINT.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            request_timeout_secs: None,
        }
    }
}
