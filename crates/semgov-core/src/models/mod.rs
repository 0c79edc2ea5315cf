mod claim;
mod decision;
mod entity;
mod outcome;
mod polarity;
mod risk;
mod semantic_result;
mod tone;

pub use claim::{Claim, ClaimType, ClaimValidationResult};
pub use decision::{Decision, DecisionKind};
pub use entity::{EntityExtractionResult, EntityValidationResult, NumberChange};
pub use outcome::GovernanceOutcome;
pub use polarity::{PolarityAnalysis, ReversedPair};
pub use risk::{RiskLabel, RiskLevel};
pub use semantic_result::{SemanticResult, ThresholdReport};
pub use tone::{Tone, ToneAnalysisResult, ToneValidationResult};
