//! Polarity flip detection.
//!
//! Two independent signals: a change in negation status, and a rewrite that
//! swaps one side of an opposing word pair for the other.

use std::collections::BTreeSet;

use semgov_core::models::{PolarityAnalysis, ReversedPair};
use semgov_core::traits::IPairValidator;

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "nowhere", "n't",
    "cannot", "can't", "won't", "wouldn't", "shouldn't", "couldn't", "doesn't", "don't",
    "didn't", "isn't", "aren't", "wasn't", "weren't",
];

/// Opposing action and outcome words.
const REVERSAL_PAIRS: &[(&str, &str)] = &[
    ("proceed", "abort"),
    ("proceed", "halt"),
    ("continue", "stop"),
    ("continue", "discontinue"),
    ("increase", "decrease"),
    ("approve", "reject"),
    ("accept", "reject"),
    ("allow", "deny"),
    ("allow", "forbid"),
    ("permit", "prohibit"),
    ("enable", "disable"),
    ("include", "exclude"),
    ("confirm", "deny"),
    ("support", "oppose"),
    ("succeed", "fail"),
    ("success", "failure"),
    ("win", "lose"),
    ("benefit", "harm"),
    ("improve", "worsen"),
    ("growth", "decline"),
    ("positive", "negative"),
    ("effective", "ineffective"),
    ("safe", "unsafe"),
    ("secure", "insecure"),
    ("correct", "incorrect"),
    ("valid", "invalid"),
    ("legal", "illegal"),
];

/// Inflections folded onto a base word when matching reversal pairs.
const SUFFIXES: &[&str] = &["s", "es", "d", "ed", "ing"];

/// Word lists driving polarity detection.
#[derive(Debug, Clone)]
pub struct PolarityLexicon {
    pub negations: BTreeSet<String>,
    pub reversal_pairs: Vec<(String, String)>,
}

impl PolarityLexicon {
    pub fn new<N, P>(negations: N, reversal_pairs: P) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        P: IntoIterator<Item = (String, String)>,
    {
        Self {
            negations: negations.into_iter().map(Into::into).collect(),
            reversal_pairs: reversal_pairs.into_iter().collect(),
        }
    }
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        Self::new(
            NEGATION_WORDS.iter().copied(),
            REVERSAL_PAIRS.iter().map(|(a, b)| ((*a).to_string(), (*b).to_string())),
        )
    }
}

/// Detects meaning reversals between two texts.
#[derive(Debug, Clone, Default)]
pub struct PolarityDetector {
    lexicon: PolarityLexicon,
}

impl PolarityDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: PolarityLexicon) -> Self {
        Self { lexicon }
    }

    /// Whole-word negations in `text`.
    pub fn count_negations(&self, text: &str) -> usize {
        tokens(text)
            .iter()
            .filter(|t| self.lexicon.negations.contains(t.as_str()))
            .count()
    }

    /// Negated when any negation word occurs or a word carries `n't`.
    pub fn is_negated(&self, text: &str) -> bool {
        self.count_negations(text) > 0 || normalize(text).contains("n't")
    }

    /// Pairs where `original` uses only one side and `proposed` only the other.
    pub fn reversed_pairs(&self, original: &str, proposed: &str) -> Vec<ReversedPair> {
        let orig = tokens(original);
        let prop = tokens(proposed);

        let mut reversed = Vec::new();
        for (a, b) in &self.lexicon.reversal_pairs {
            let (oa, ob) = (uses(&orig, a), uses(&orig, b));
            let (pa, pb) = (uses(&prop, a), uses(&prop, b));
            if oa && !ob && pb && !pa {
                reversed.push(ReversedPair { original: a.clone(), proposed: b.clone() });
            } else if ob && !oa && pa && !pb {
                reversed.push(ReversedPair { original: b.clone(), proposed: a.clone() });
            }
        }
        reversed
    }
}

impl IPairValidator for PolarityDetector {
    type Output = PolarityAnalysis;

    fn validate(&self, original: &str, proposed: &str) -> PolarityAnalysis {
        PolarityAnalysis {
            original_negated: self.is_negated(original),
            proposed_negated: self.is_negated(proposed),
            original_negations: self.count_negations(original),
            proposed_negations: self.count_negations(proposed),
            reversed_pairs: self.reversed_pairs(original, proposed),
        }
    }

    fn name(&self) -> &str {
        "polarity"
    }
}

/// Lowercase with typographic apostrophes folded to ASCII.
fn normalize(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}

/// Lowercase words with surrounding punctuation stripped. Inner apostrophes
/// survive so contractions stay whole.
fn tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn uses(tokens: &[String], word: &str) -> bool {
    tokens.iter().any(|t| inflects(t, word))
}

fn inflects(token: &str, word: &str) -> bool {
    if token == word {
        return true;
    }
    if let Some(stem) = token.strip_suffix("ied") {
        if word.strip_suffix('y') == Some(stem) {
            return true;
        }
    }
    SUFFIXES
        .iter()
        .any(|s| token.strip_suffix(s).is_some_and(|stem| stem == word || word.strip_suffix('e') == Some(stem)))
}
