use std::fmt;

use serde::{Deserialize, Serialize};

/// Output of semantic classification.
///
/// Serialized as a plain string. Any label other than the three known ones
/// deserializes into `Unrecognized`, which the decision engine blocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLabel {
    Safe,
    Risky,
    Dangerous,
    Unrecognized(String),
}

impl RiskLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Safe => "safe",
            Self::Risky => "risky",
            Self::Dangerous => "dangerous",
            Self::Unrecognized(label) => label,
        }
    }
}

impl From<String> for RiskLabel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "safe" => Self::Safe,
            "risky" => Self::Risky,
            "dangerous" => Self::Dangerous,
            _ => Self::Unrecognized(label),
        }
    }
}

impl From<&str> for RiskLabel {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<RiskLabel> for String {
    fn from(label: RiskLabel) -> Self {
        match label {
            RiskLabel::Unrecognized(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-validator severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    None,
    Low,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
