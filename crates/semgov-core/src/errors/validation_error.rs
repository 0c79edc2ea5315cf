use super::EmbeddingError;

/// User-safe validation failure.
///
/// `Display` only ever renders `message`. The underlying cause is kept in
/// `internal_reason` for diagnostics logs and never shown to callers.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    internal_reason: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, internal_reason: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            internal_reason: internal_reason.into(),
        }
    }

    /// The caller-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic detail. Log it, never return it to a user.
    pub fn internal_reason(&self) -> &str {
        &self.internal_reason
    }
}

impl From<EmbeddingError> for ValidationError {
    fn from(err: EmbeddingError) -> Self {
        Self::new("Failed to compute semantic similarity", err.to_string())
    }
}
