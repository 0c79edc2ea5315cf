/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid thresholds: safe {safe} must exceed risky {risky}, both within [0, 1]")]
    InvalidThresholds { safe: f64, risky: f64 },

    #[error("config parse failed: {reason}")]
    Parse { reason: String },

    #[error("config file unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("API key missing: environment variable {env_var} is not set")]
    MissingApiKey { env_var: String },

    #[error("unknown embedding provider: {provider}")]
    UnknownProvider { provider: String },

    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
