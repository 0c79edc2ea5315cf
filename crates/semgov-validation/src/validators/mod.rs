//! The four pair validators run by the orchestrator.

pub mod claim;
pub mod entity;
pub mod polarity;
pub mod tone;

pub use claim::{ClaimPatterns, ClaimValidator};
pub use entity::{EntityPatterns, EntityValidator};
pub use polarity::{PolarityDetector, PolarityLexicon};
pub use tone::{ToneAnalyzer, ToneIndicators};
