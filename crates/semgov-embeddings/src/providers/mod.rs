//! Provider registry.
//!
//! `placeholder` is the default and needs nothing. `api` needs its key in the
//! environment; a missing key is a configuration error rather than a silent
//! fallback, so a production deployment never scores with the placeholder.

pub mod api_provider;
pub mod placeholder;

pub use api_provider::ApiProvider;
pub use placeholder::PlaceholderProvider;

use semgov_core::config::EmbeddingConfig;
use semgov_core::errors::ConfigError;
use semgov_core::traits::IEmbeddingProvider;
use tracing::info;

/// Create the configured provider, boxed.
pub fn create_provider(config: &EmbeddingConfig) -> Result<Box<dyn IEmbeddingProvider>, ConfigError> {
    match config.provider.as_str() {
        "placeholder" => {
            info!(provider = "placeholder", dims = config.dimensions, "using placeholder embeddings");
            Ok(Box::new(PlaceholderProvider::new(config.dimensions)))
        }
        "api" => {
            let api_key = std::env::var(&config.api_key_env)
                .ok()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingApiKey {
                    env_var: config.api_key_env.clone(),
                })?;
            info!(provider = "api", model = %config.model, "using API embeddings");
            Ok(Box::new(ApiProvider::from_config(config, api_key)))
        }
        other => Err(ConfigError::UnknownProvider {
            provider: other.to_string(),
        }),
    }
}
