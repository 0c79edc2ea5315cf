//! Test fixture loader for semgov golden scenarios, plus test doubles shared
//! across crates.
//!
//! Golden files live under `golden/` in this crate and are addressed by a
//! path relative to the fixtures root, e.g. `golden/governance/entity_drift.json`.

use std::path::{Path, PathBuf};

use semgov_core::errors::EmbeddingError;
use semgov_core::traits::IEmbeddingProvider;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    read_json(&fixtures_root().join(relative_path))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> T {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// One golden governance scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    pub original: String,
    pub proposed: String,
    /// Similarity the provider reports, standing in for a real embedding model.
    pub forced_similarity: f64,
    pub expected: GoldenExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub risk_label: String,
    pub decision: String,
    pub entity_preserved: bool,
    pub polarity_flip: bool,
    /// Substrings that must each appear in some validation flag.
    #[serde(default)]
    pub flags_contain: Vec<String>,
    /// Substring of the decision reason.
    #[serde(default)]
    pub reason_contains: Option<String>,
}

/// Load every scenario under `golden/governance`.
pub fn governance_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden/governance")
        .iter()
        .map(|path| read_json(path))
        .collect()
}

/// Embedding provider that reports a fixed similarity for every pair.
///
/// `embed` still returns a unit vector so code paths calling it directly
/// keep working; only `similarity` is pinned.
#[derive(Debug, Clone, Copy)]
pub struct FixedSimilarity(pub f64);

impl IEmbeddingProvider for FixedSimilarity {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyText);
        }
        Ok(vec![1.0])
    }

    fn dimensions(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f64, EmbeddingError> {
        self.embed(a)?;
        self.embed(b)?;
        Ok(self.0)
    }
}

/// Provider whose every call fails, for error-path tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableProvider;

impl IEmbeddingProvider for UnavailableProvider {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::ProviderUnavailable {
            provider: "unavailable".to_string(),
        })
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_governance_scenarios_exist() {
        let files = [
            "golden/governance/clean_rewrite.json",
            "golden/governance/entity_drift.json",
            "golden/governance/low_similarity.json",
            "golden/governance/moderate_drift.json",
            "golden/governance/negation_flip.json",
            "golden/governance/proceed_abort.json",
            "golden/governance/tone_shift.json",
            "golden/governance/uncited_claims.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn governance_scenarios_parse() {
        let scenarios = governance_scenarios();
        assert_eq!(scenarios.len(), 8);
        for s in &scenarios {
            assert!((0.0..=1.0).contains(&s.forced_similarity), "{}", s.name);
            assert!(!s.original.trim().is_empty(), "{}", s.name);
        }
    }

    #[test]
    fn single_scenario_loads_by_relative_path() {
        let s: GoldenScenario = load_fixture("golden/governance/proceed_abort.json");
        assert_eq!(s.expected.decision, "blocked");
        assert!(s.expected.polarity_flip);
    }

    #[test]
    fn fixed_similarity_rejects_empty_text() {
        assert!(FixedSimilarity(0.9).similarity("", "text").is_err());
        assert_eq!(FixedSimilarity(0.9).similarity("a", "b").unwrap(), 0.9);
    }
}
