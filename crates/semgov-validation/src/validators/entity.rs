//! Entity preservation: numbers, percentages, dates, years, proper nouns
//! and citations must survive a rewrite.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use semgov_core::models::{EntityExtractionResult, EntityValidationResult, NumberChange, RiskLevel};
use semgov_core::traits::IPairValidator;

/// More than this many added entities makes a rewrite suspicious.
const MAX_ADDED_ENTITIES: usize = 2;

/// Capitalized words that start clauses rather than name things.
const DEFAULT_STOPLIST: &[&str] = &[
    "The", "This", "That", "These", "Those", "It", "They", "We", "You", "However",
    "Therefore", "Furthermore", "Moreover", "Although", "Because", "While", "When",
    "Where", "What", "Which", "Who", "Also", "But", "And", "Or", "So", "Yet", "For", "Nor",
];

static DEFAULT_PATTERNS: LazyLock<EntityPatterns> = LazyLock::new(|| EntityPatterns {
    numbers: Regex::new(r"\b\d+(?:\.\d+)?\b").unwrap(),
    percentages: Regex::new(r"\b\d+(?:\.\d+)?\s*%").unwrap(),
    dates: Regex::new(
        r"(?i)\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+\d{1,2},?\s+\d{4}\b|\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
    )
    .unwrap(),
    years: Regex::new(r"\b(?:19|20)\d{2}\b").unwrap(),
    proper_nouns: Regex::new(r"\b[A-Z][a-z]{2,}(?:\s+[A-Z][a-z]+)*\b").unwrap(),
    citations: Regex::new(
        r"\([A-Z][a-z]+(?:\s+et\s+al\.?|\s+(?:&|and)\s+[A-Z][a-z]+)?,?\s*\d{4}\)|\[\d+\]|\[citation\s+needed\]",
    )
    .unwrap(),
    stoplist: DEFAULT_STOPLIST.iter().map(|w| (*w).to_string()).collect(),
});

/// Pattern table for entity extraction. Fields are public so callers can
/// swap any family.
#[derive(Debug, Clone)]
pub struct EntityPatterns {
    /// Numeric literals. Matches followed by `%` are dropped at extraction.
    pub numbers: Regex,
    pub percentages: Regex,
    pub dates: Regex,
    pub years: Regex,
    /// Runs of capitalized words.
    pub proper_nouns: Regex,
    pub citations: Regex,
    /// Capitalized runs excluded from proper nouns.
    pub stoplist: BTreeSet<String>,
}

impl Default for EntityPatterns {
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

/// Detects factual drift by comparing the entity sets of two texts.
#[derive(Debug, Clone, Default)]
pub struct EntityValidator {
    patterns: EntityPatterns,
}

impl EntityValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(patterns: EntityPatterns) -> Self {
        Self { patterns }
    }

    /// Replace the proper-noun stoplist, keeping the default patterns.
    pub fn with_stoplist<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patterns = EntityPatterns::default();
        patterns.stoplist = words.into_iter().map(Into::into).collect();
        Self { patterns }
    }

    /// Extract entities from one text.
    pub fn extract(&self, text: &str) -> EntityExtractionResult {
        if text.trim().is_empty() {
            return EntityExtractionResult::default();
        }
        let p = &self.patterns;

        let numbers = p
            .numbers
            .find_iter(text)
            // A numeral owned by a percentage ("3.5%", "50 %") is dropped
            // whole, so "3.5%" yields no bare "3" fragment.
            .filter(|m| !text[m.end()..].trim_start().starts_with('%'))
            .map(|m| m.as_str().to_string())
            .collect();

        EntityExtractionResult {
            numbers,
            percentages: collect_matches(&p.percentages, text),
            dates: collect_matches(&p.dates, text),
            years: collect_matches(&p.years, text),
            proper_nouns: self.proper_nouns(text),
            citations: collect_matches(&p.citations, text),
        }
    }

    /// Capitalized runs that are neither at the text start nor directly
    /// after a sentence terminator.
    fn proper_nouns(&self, text: &str) -> Vec<String> {
        let re = &self.patterns.proper_nouns;
        let mut found = Vec::new();
        let mut pos = 0;

        while let Some(m) = re.find_at(text, pos) {
            if !is_mid_sentence(text, m.start()) {
                // Retry inside the run: its second word may still qualify.
                pos = next_char_boundary(text, m.start());
                continue;
            }
            let run = m.as_str();
            if !self.patterns.stoplist.contains(run) {
                found.push(run.to_string());
            }
            pos = m.end();
        }
        found
    }
}

impl IPairValidator for EntityValidator {
    type Output = EntityValidationResult;

    fn validate(&self, original: &str, proposed: &str) -> EntityValidationResult {
        let orig = self.extract(original);
        let prop = self.extract(proposed);

        let orig_set = orig.all_entities();
        let prop_set = prop.all_entities();

        let missing: Vec<String> = orig_set.difference(&prop_set).cloned().collect();
        let added: Vec<String> = prop_set.difference(&orig_set).cloned().collect();
        let changed_numbers = detect_number_changes(orig.numeric_tokens(), prop.numeric_tokens());

        let risk_level = if !missing.is_empty() || !changed_numbers.is_empty() {
            RiskLevel::High
        } else if added.len() > MAX_ADDED_ENTITIES {
            RiskLevel::Low
        } else {
            RiskLevel::None
        };

        let preserved =
            missing.is_empty() && changed_numbers.is_empty() && added.len() <= MAX_ADDED_ENTITIES;

        EntityValidationResult {
            preserved,
            missing,
            added,
            changed_numbers,
            risk_level,
        }
    }

    fn name(&self) -> &str {
        "entity"
    }
}

fn collect_matches(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Pairs numeric tokens by sorted string order when both sides hold the same
/// non-zero count. A reorder of two values pairs them with each other and so
/// goes unnoticed.
fn detect_number_changes(mut orig: Vec<String>, mut prop: Vec<String>) -> Vec<NumberChange> {
    if orig.is_empty() || orig.len() != prop.len() {
        return Vec::new();
    }
    orig.sort();
    prop.sort();
    orig.into_iter()
        .zip(prop)
        .filter(|(o, p)| o != p)
        .map(|(original, proposed)| NumberChange { original, proposed })
        .collect()
}

fn is_mid_sentence(text: &str, start: usize) -> bool {
    let before = &text[..start];
    match before.chars().next_back() {
        Some(c) if c.is_whitespace() => {}
        _ => return false,
    }
    !matches!(before.trim_end().chars().next_back(), None | Some('.' | '!' | '?'))
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_each_family() {
        let v = EntityValidator::new();
        let text = "Revenue grew 12.5% to 340 units on March 3, 2021 according to Acme Corp (Smith et al., 2020) [3].";
        let e = v.extract(text);
        assert_eq!(e.percentages, vec!["12.5%"]);
        assert!(e.numbers.contains(&"340".to_string()));
        assert!(!e.numbers.contains(&"12.5".to_string()));
        assert_eq!(e.dates, vec!["March 3, 2021"]);
        assert!(e.years.contains(&"2021".to_string()));
        assert!(e.years.contains(&"2020".to_string()));
        assert_eq!(e.proper_nouns, vec!["March", "Acme Corp"]);
        assert_eq!(e.citations, vec!["(Smith et al., 2020)", "[3]"]);
    }

    #[test]
    fn slashed_dates_and_bracket_citations() {
        let e = EntityValidator::new().extract("Filed on 01/15/2024 [citation needed] and 3-4-22.");
        assert_eq!(e.dates, vec!["01/15/2024", "3-4-22"]);
        assert_eq!(e.citations, vec!["[citation needed]"]);
    }

    #[test]
    fn sentence_initial_capitals_are_not_proper_nouns() {
        let e = EntityValidator::new().extract("Today we met. Afterwards we called Boston.");
        assert_eq!(e.proper_nouns, vec!["Boston"]);
    }

    #[test]
    fn second_word_of_sentence_initial_run_is_kept() {
        let e = EntityValidator::new().extract("Board Members met with Alice");
        assert_eq!(e.proper_nouns, vec!["Members", "Alice"]);
    }

    #[test]
    fn stoplisted_words_are_dropped() {
        let e = EntityValidator::new().extract("we left and However it rained in Paris");
        assert_eq!(e.proper_nouns, vec!["Paris"]);

        let custom = EntityValidator::with_stoplist(["Paris"]);
        assert!(custom.extract("we left for Paris").proper_nouns.is_empty());
    }

    #[test]
    fn empty_text_extracts_nothing() {
        assert!(EntityValidator::new().extract("   ").is_empty());
    }

    #[test]
    fn identical_texts_preserve_entities() {
        let text = "In 2020, 50% of users in Berlin reported issues.";
        let r = EntityValidator::new().validate(text, text);
        assert!(r.preserved);
        assert_eq!(r.risk_level, RiskLevel::None);
    }

    #[test]
    fn changed_numbers_are_high_risk() {
        let r = EntityValidator::new().validate(
            "In 2020, 50% of users reported issues.",
            "In 2021, 60% of users reported issues.",
        );
        assert!(!r.preserved);
        assert_eq!(r.risk_level, RiskLevel::High);
        assert_eq!(r.missing, vec!["2020", "50%"]);
        assert_eq!(
            r.changed_numbers,
            vec![
                NumberChange { original: "2020".into(), proposed: "2021".into() },
                NumberChange { original: "50%".into(), proposed: "60%".into() },
            ]
        );
    }

    #[test]
    fn spaced_percentages_are_extracted() {
        let e = EntityValidator::new().extract("Growth was 50 % in the first quarter.");
        assert_eq!(e.percentages, vec!["50 %"]);
        assert!(e.numbers.is_empty());
    }

    #[test]
    fn changed_spaced_percentage_is_not_preserved() {
        let r = EntityValidator::new().validate(
            "Growth was 50 % in the first quarter.",
            "Growth was 60 % in the first quarter.",
        );
        assert!(!r.preserved);
        assert_eq!(r.risk_level, RiskLevel::High);
        assert_eq!(
            r.changed_numbers,
            vec![NumberChange { original: "50 %".into(), proposed: "60 %".into() }]
        );
    }

    #[test]
    fn decimal_percentage_yields_no_bare_number() {
        let e = EntityValidator::new().extract("Churn fell to 3.5% last year.");
        assert_eq!(e.percentages, vec!["3.5%"]);
        assert!(e.numbers.is_empty());
    }

    #[test]
    fn reordered_numbers_go_unnoticed_as_changes() {
        let r = EntityValidator::new().validate("from 10 to 20 units", "from 20 to 10 units");
        assert!(r.changed_numbers.is_empty());
        assert!(r.preserved);
    }

    #[test]
    fn many_additions_are_low_risk() {
        let r = EntityValidator::new().validate(
            "the meeting went well",
            "the meeting in Paris with Alice and Bobby went well in 2019",
        );
        assert!(r.missing.is_empty());
        assert!(r.added.len() > MAX_ADDED_ENTITIES);
        assert!(!r.preserved);
        assert_eq!(r.risk_level, RiskLevel::Low);
    }

    #[test]
    fn multibyte_text_does_not_panic() {
        let v = EntityValidator::new();
        let r = v.validate("Café Zürich serves 3 crêpes.", "Un café à Zürich sert 3 crêpes.");
        assert_eq!(r.changed_numbers.len(), 0);
    }
}
