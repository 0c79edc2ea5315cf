//! # semgov-governance
//!
//! Turns a semantic measurement into a verdict.
//!
//! - [`DecisionEngine`]: pure, priority-ordered rules from `SemanticResult` to `Decision`
//! - [`GovernancePipeline`]: provider + validator + engine, reusable across calls
//! - [`validate_and_decide`]: one-shot convenience over a config, or over a threshold pair only

pub mod decision;
pub mod pipeline;

pub use decision::DecisionEngine;
pub use pipeline::{validate_and_decide, validate_and_decide_with_thresholds, GovernancePipeline};
