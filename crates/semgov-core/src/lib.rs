//! # semgov-core
//!
//! Foundation crate for the semgov governance pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SemgovConfig;
pub use errors::{SemgovError, SemgovResult};
pub use models::{Decision, DecisionKind, RiskLabel, RiskLevel, SemanticResult};
