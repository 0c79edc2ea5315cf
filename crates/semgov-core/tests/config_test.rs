use semgov_core::config::*;
use semgov_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SemgovConfig::from_toml("").unwrap();

    // Threshold defaults
    assert_eq!(config.thresholds.safe_threshold, 0.85);
    assert_eq!(config.thresholds.risky_threshold, 0.60);

    // Embedding defaults
    assert_eq!(config.embedding.provider, "placeholder");
    assert_eq!(config.embedding.dimensions, 128);
    assert_eq!(config.embedding.api_key_env, "OPENAI_API_KEY");
    assert!(config.embedding.request_timeout_secs.is_none());

    // Input gate defaults
    assert_eq!(config.input.min_text_length, 20);
    assert_eq!(config.input.max_text_length, 1800);
    assert_eq!(config.input.max_newlines, 50);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[thresholds]
safe_threshold = 0.9

[embedding]
provider = "api"
request_timeout_secs = 10
"#;
    let config = SemgovConfig::from_toml(toml).unwrap();
    assert_eq!(config.thresholds.safe_threshold, 0.9);
    // Non-overridden fields keep defaults
    assert_eq!(config.thresholds.risky_threshold, 0.60);
    assert_eq!(config.embedding.provider, "api");
    assert_eq!(config.embedding.request_timeout_secs, Some(10));
    assert_eq!(config.embedding.model, "text-embedding-3-small");
}

#[test]
fn config_rejects_inverted_thresholds() {
    let toml = r#"
[thresholds]
safe_threshold = 0.5
risky_threshold = 0.7
"#;
    let err = SemgovConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidThresholds { .. }));
}

#[test]
fn config_rejects_equal_thresholds() {
    assert!(ThresholdConfig::new(0.7, 0.7).is_err());
}

#[test]
fn config_rejects_out_of_range_thresholds() {
    assert!(ThresholdConfig::new(1.2, 0.6).is_err());
    assert!(ThresholdConfig::new(0.85, -0.1).is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    let err = SemgovConfig::from_toml("thresholds = [").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn config_load_reports_missing_file() {
    let err = SemgovConfig::load("/nonexistent/semgov.toml").unwrap_err();
    match err {
        ConfigError::Unreadable { path, .. } => assert!(path.contains("semgov.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_serde_roundtrip() {
    let config = SemgovConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = SemgovConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.thresholds, config.thresholds);
    assert_eq!(roundtripped.embedding.dimensions, config.embedding.dimensions);
}
