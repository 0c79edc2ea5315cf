use std::fmt;

use super::{ConfigError, EmbeddingError, ValidationError};

/// Which side of a text pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Original,
    Proposed,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => f.write_str("original"),
            Self::Proposed => f.write_str("proposed"),
        }
    }
}

/// Root error type for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum SemgovError {
    #[error("cannot validate: {field} text is empty")]
    EmptyInput { field: InputField },

    #[error("input rejected: {reason}")]
    InputRejected { reason: String },

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("{0}")]
    ValidationError(#[from] ValidationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
