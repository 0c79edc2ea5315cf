//! Claim and citation validation.
//!
//! A rewrite that introduces statistics, causal links, appeals to authority
//! or dated assertions without a nearby citation is flagged for review.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use semgov_core::constants::MAX_REPORTED_UNCITED_CLAIMS;
use semgov_core::errors::ConfigError;
use semgov_core::models::{Claim, ClaimType, ClaimValidationResult, RiskLevel};
use semgov_core::traits::IPairValidator;

use crate::patterns::{compile_all, compile_static, count_matches};
use crate::text::{prefix_chars, window};

/// Chars of context kept before and after a claim match.
const CONTEXT_BEFORE: usize = 20;
const CONTEXT_AFTER: usize = 50;
/// Chars searched for a citation before and after a claim match.
const CITATION_BEFORE: usize = 50;
const CITATION_AFTER: usize = 200;
/// Claims with the same lowercase prefix of this length are the same claim.
const CLAIM_KEY_CHARS: usize = 50;
const SNIPPET_CHARS: usize = 80;
const HIGH_RISK_UNCITED: usize = 3;

const STATISTIC: &[&str] = &[
    r"\b\d+(?:\.\d+)?%\s+of\s+\w+",
    r"\b\d+(?:\.\d+)?\s*(?:million|billion|thousand)\b",
    r"\b(?:approximately|about|nearly|over|under)\s+\d+",
    r"\baverage(?:d|s)?\s+(?:of\s+)?\d+",
];

const CAUSATION: &[&str] = &[
    r"\b(?:causes?|caused)\s+(?:a\s+)?(?:significant|major|minor)?\s*\w+",
    r"\b(?:leads?\s+to|led\s+to)\b",
    r"\b(?:results?\s+in|resulted\s+in)\b",
    r"\b(?:due\s+to|because\s+of)\b",
    r"\b(?:contributes?\s+to|contributed\s+to)\b",
    r"\b(?:associated\s+with)\b",
];

const AUTHORITY: &[&str] = &[
    r"\b(?:studies?\s+(?:show|indicate|suggest|found|reveal))",
    r"\b(?:research\s+(?:shows?|indicates?|suggests?|found))",
    r"\b(?:according\s+to\s+(?:experts?|scientists?|researchers?))",
    r"\b(?:experts?\s+(?:say|believe|agree|suggest))",
    r"\b(?:it\s+(?:has\s+been|is)\s+(?:shown|proven|demonstrated))",
    r"\b(?:evidence\s+(?:shows?|suggests?|indicates?))",
];

const TEMPORAL: &[&str] = &[
    r"\b(?:since|from)\s+(?:the\s+)?\d{4}",
    r"\b(?:in|during)\s+(?:the\s+)?\d{4}",
    r"\bover\s+the\s+(?:past|last)\s+\d+\s+(?:years?|decades?|months?)",
];

/// Citation forms. Matched case-sensitively.
const CITATIONS: &[&str] = &[
    r"\([A-Z][a-z]+(?:\s+et\s+al\.?)?,?\s*\d{4}\)",
    r"\([A-Z][a-z]+\s+(?:&|and)\s+[A-Z][a-z]+,?\s*\d{4}\)",
    r"\[\d+(?:[-,]\d+)*\]",
    r"\[\d+(?:,\s*\d+)+\]",
    r"(?:according\s+to|as\s+(?:stated|reported)\s+(?:by|in))\s+[A-Z]",
];

static DEFAULT_PATTERNS: LazyLock<ClaimPatterns> = LazyLock::new(|| ClaimPatterns {
    families: vec![
        (ClaimType::Statistic, compile_static(STATISTIC, true)),
        (ClaimType::Causation, compile_static(CAUSATION, true)),
        (ClaimType::Authority, compile_static(AUTHORITY, true)),
        (ClaimType::Temporal, compile_static(TEMPORAL, true)),
    ],
    citations: compile_static(CITATIONS, false),
});

/// Claim and citation pattern tables.
#[derive(Debug, Clone)]
pub struct ClaimPatterns {
    /// Claim families in scan order. Compiled case-insensitively.
    pub families: Vec<(ClaimType, Vec<Regex>)>,
    /// Compiled case-sensitively.
    pub citations: Vec<Regex>,
}

impl ClaimPatterns {
    /// Compile custom tables.
    pub fn compile(
        families: &[(ClaimType, &[&str])],
        citations: &[&str],
    ) -> Result<Self, ConfigError> {
        let families = families
            .iter()
            .map(|(kind, sources)| Ok((*kind, compile_all(sources, true)?)))
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self {
            families,
            citations: compile_all(citations, false)?,
        })
    }
}

impl Default for ClaimPatterns {
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

/// Detects factual claims and checks that new ones are cited.
#[derive(Debug, Clone, Default)]
pub struct ClaimValidator {
    patterns: ClaimPatterns,
}

impl ClaimValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(patterns: ClaimPatterns) -> Self {
        Self { patterns }
    }

    /// All claims in `text`, overlaps removed in favour of the earliest and
    /// then longest match.
    pub fn extract_claims(&self, text: &str) -> Vec<Claim> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut claims = Vec::new();
        for (claim_type, patterns) in &self.patterns.families {
            for re in patterns {
                for m in re.find_iter(text) {
                    let context = window(text, m.start(), m.end(), CONTEXT_BEFORE, CONTEXT_AFTER);
                    claims.push(Claim {
                        text: context.trim().to_string(),
                        claim_type: *claim_type,
                        needs_citation: true,
                        has_citation: false,
                        start_pos: m.start(),
                        end_pos: m.end(),
                    });
                }
            }
        }

        claims.sort_by_key(|c| (c.start_pos, Reverse(c.end_pos)));
        let mut kept: Vec<Claim> = Vec::with_capacity(claims.len());
        for claim in claims {
            if kept.last().map_or(true, |last| claim.start_pos >= last.end_pos) {
                kept.push(claim);
            }
        }
        kept
    }

    /// Number of citation matches across all citation forms.
    pub fn count_citations(&self, text: &str) -> usize {
        count_matches(&self.patterns.citations, text)
    }

    fn has_nearby_citation(&self, text: &str, claim: &Claim) -> bool {
        let region = window(text, claim.start_pos, claim.end_pos, CITATION_BEFORE, CITATION_AFTER);
        self.patterns.citations.iter().any(|re| re.is_match(region))
    }
}

fn claim_key(claim: &Claim) -> String {
    prefix_chars(&claim.text.to_lowercase(), CLAIM_KEY_CHARS).to_string()
}

impl IPairValidator for ClaimValidator {
    type Output = ClaimValidationResult;

    fn validate(&self, original: &str, proposed: &str) -> ClaimValidationResult {
        let original_keys: HashSet<String> =
            self.extract_claims(original).iter().map(claim_key).collect();
        let original_citation_count = self.count_citations(original);
        let citation_count = self.count_citations(proposed);

        let mut claims_detected = self.extract_claims(proposed);
        let mut new_claim_count = 0;
        let mut uncited = Vec::new();

        for claim in &mut claims_detected {
            claim.has_citation = self.has_nearby_citation(proposed, claim);
            if original_keys.contains(&claim_key(claim)) {
                continue;
            }
            new_claim_count += 1;
            if !claim.has_citation {
                uncited.push(format!("{}...", prefix_chars(&claim.text, SNIPPET_CHARS)));
            }
        }

        let uncited_count = uncited.len();
        let risk_level = if uncited_count >= HIGH_RISK_UNCITED {
            RiskLevel::High
        } else if uncited_count > 0 || citation_count < original_citation_count {
            RiskLevel::Low
        } else {
            RiskLevel::None
        };
        uncited.truncate(MAX_REPORTED_UNCITED_CLAIMS);

        ClaimValidationResult {
            claims_detected,
            new_claim_count,
            uncited_count,
            uncited_claims: uncited,
            citation_count,
            original_citation_count,
            risk_level,
        }
    }

    fn name(&self) -> &str {
        "claim"
    }
}
