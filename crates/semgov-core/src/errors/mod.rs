mod config_error;
mod embedding_error;
mod semgov_error;
mod validation_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use semgov_error::{InputField, SemgovError};
pub use validation_error::ValidationError;

/// Convenience alias used throughout the workspace.
pub type SemgovResult<T> = Result<T, SemgovError>;
