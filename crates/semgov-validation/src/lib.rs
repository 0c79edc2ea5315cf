//! # semgov-validation
//!
//! Validators comparing an original passage with an AI-proposed rewrite,
//! and the orchestrator that folds them into one risk label.
//!
//! ## Validators
//! 1. **Entity**: numbers, percentages, dates, years, proper nouns, citations
//! 2. **Claim**: new statistic/causation/authority/temporal claims without citations
//! 3. **Tone**: formality score and tone category shifts
//! 4. **Polarity**: negation status and opposing-word reversals
//!
//! Embedding similarity comes from an `IEmbeddingProvider`. The input gate
//! in [`input`] runs before any of this, in front of the AI call.

pub mod engine;
pub mod input;
pub mod patterns;
mod text;
pub mod validators;

pub use engine::{classify, SemanticValidator};
pub use input::InputValidator;
pub use validators::{ClaimValidator, EntityValidator, PolarityDetector, ToneAnalyzer};
