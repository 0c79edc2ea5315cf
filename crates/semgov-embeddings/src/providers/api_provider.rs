//! OpenAI-compatible embedding API provider.
//!
//! One HTTP request per `embed` call. No retries and no cache: a failed
//! request fails the validation that issued it.

use std::time::Duration;

use semgov_core::config::EmbeddingConfig;
use semgov_core::errors::EmbeddingError;
use semgov_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Known output sizes for common embedding models. Unknown models report 0
/// and skip the length check.
fn known_dimensions(model: &str) -> usize {
    match model {
        "text-embedding-3-small" | "text-embedding-ada-002" => 1536,
        "text-embedding-3-large" => 3072,
        _ => 0,
    }
}

/// Cloud API embedding provider.
pub struct ApiProvider {
    model: String,
    api_key: String,
    endpoint: String,
    dimensions: usize,
    timeout: Option<Duration>,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

impl ApiProvider {
    pub fn new(model: String, api_key: String, endpoint: String, timeout: Option<Duration>) -> Self {
        Self {
            dimensions: known_dimensions(&model),
            model,
            api_key,
            endpoint,
            timeout,
        }
    }

    pub fn from_config(config: &EmbeddingConfig, api_key: String) -> Self {
        Self::new(
            config.model.clone(),
            api_key,
            config.endpoint.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Send a single request. The trait is synchronous, so the call runs on a
    /// current-thread tokio runtime owned by this invocation.
    fn send_request(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("runtime error: {e}"),
            })?;

        let body = EmbedRequest {
            model: &self.model,
            input: text.trim(),
        };

        rt.block_on(async {
            let client = reqwest::Client::new();
            let mut request = client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body);
            if let Some(timeout) = self.timeout {
                request = request.timeout(timeout);
            }

            let response = request
                .send()
                .await
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("HTTP error: {e}"),
                })?;

            let status = response.status();
            if !status.is_success() {
                // The body may echo the input, so only the status is kept.
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("API returned {status}"),
                });
            }

            let resp: EmbedResponse =
                response
                    .json()
                    .await
                    .map_err(|e| EmbeddingError::MalformedResponse {
                        provider: self.model.clone(),
                        reason: format!("JSON parse error: {e}"),
                    })?;

            resp.data
                .into_iter()
                .next()
                .map(|d| d.embedding)
                .ok_or_else(|| EmbeddingError::MalformedResponse {
                    provider: self.model.clone(),
                    reason: "empty data array".to_string(),
                })
        })
    }
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyText);
        }

        let embedding = self.send_request(text).inspect_err(|e| {
            warn!(model = %self.model, error = %e, "API embedding request failed");
        })?;

        if self.dimensions > 0 && embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            });
        }
        if embedding.is_empty() {
            return Err(EmbeddingError::MalformedResponse {
                provider: self.model.clone(),
                reason: "empty embedding".to_string(),
            });
        }

        debug!(model = %self.model, dims = embedding.len(), "API embedding received");
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }
}
