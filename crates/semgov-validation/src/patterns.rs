//! Compilation of pattern tables.
//!
//! Default tables are literal and compiled once behind `LazyLock`. Callers
//! injecting their own tables go through [`compile_all`], which reports a bad
//! pattern as a configuration error instead of panicking.

use regex::{Regex, RegexBuilder};
use semgov_core::errors::ConfigError;

/// Compile a list of pattern sources.
pub fn compile_all(sources: &[&str], case_insensitive: bool) -> Result<Vec<Regex>, ConfigError> {
    sources
        .iter()
        .map(|src| {
            RegexBuilder::new(src)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|e| ConfigError::InvalidPattern {
                    pattern: (*src).to_string(),
                    reason: e.to_string(),
                })
        })
        .collect()
}

/// Compile a literal default table. Only for patterns known to be valid.
pub(crate) fn compile_static(sources: &[&str], case_insensitive: bool) -> Vec<Regex> {
    compile_all(sources, case_insensitive).expect("built-in pattern table must compile")
}

/// Total non-overlapping matches of every pattern in `patterns`.
pub(crate) fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}
