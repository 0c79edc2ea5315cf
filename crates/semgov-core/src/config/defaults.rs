// Single source of truth for all default values.

// --- Thresholds ---
pub const DEFAULT_SAFE_THRESHOLD: f64 = 0.85;
pub const DEFAULT_RISKY_THRESHOLD: f64 = 0.60;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "placeholder";
pub const DEFAULT_PLACEHOLDER_DIMENSIONS: usize = 128;
pub const DEFAULT_API_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

// --- Input gate ---
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 20;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1800;
pub const DEFAULT_MAX_NEWLINES: usize = 50;
pub const DEFAULT_BIBLIOGRAPHY_MIN_LENGTH: usize = 500;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
