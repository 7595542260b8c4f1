//! Tests for layered configuration loading and validation.

use std::collections::HashMap;

use pantry_core::config::{
    CliOverrides, DisplayUnitPolicy, ParserBackend, PantryConfig, Verdict,
};
use pantry_core::errors::ConfigError;
use pantry_core::{Category, Quantity, UnitKind};

#[test]
fn defaults_are_valid() {
    let config = PantryConfig::default();
    config.validate().unwrap();
    assert_eq!(config.rounding.volume, "1/4");
    assert_eq!(config.rounding.count, "1");
    assert_eq!(config.rounding.per_unit.get("gram").map(String::as_str), Some("1"));
    assert_eq!(config.aggregator.display_unit, DisplayUnitPolicy::FirstSeen);
    assert_eq!(config.parser.backend, ParserBackend::Local);
    assert!(config.normalizer.use_builtin_policy);
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = PantryConfig::from_toml(
        r#"
        [rounding]
        volume = "1/8"

        [aggregator]
        display_unit = "first_seen"
        "#,
    )
    .unwrap();
    assert_eq!(config.rounding.volume, "1/8");
    assert_eq!(config.rounding.weight, "1/4");
    assert_eq!(config.aggregator.display_unit, DisplayUnitPolicy::FirstSeen);
    assert_eq!(config.parser.timeout_secs, 5);
}

#[test]
fn policy_tables_from_toml() {
    let config = PantryConfig::from_toml(
        r#"
        [normalizer]
        variant_sensitive = ["tea"]

        [[normalizer.modifier_rules]]
        base = "tea"
        modifier = "loose"
        verdict = "discard"

        [normalizer.default_variants]
        tea = "black"

        [normalizer.aliases]
        "chai tea" = "spiced black tea"

        [categories.overrides]
        tea = "pantry"
        tofu = "produce"
        "#,
    )
    .unwrap();
    assert_eq!(config.normalizer.variant_sensitive, vec!["tea".to_string()]);
    assert_eq!(config.normalizer.modifier_rules[0].verdict, Verdict::Discard);
    assert_eq!(
        config.normalizer.default_variants.get("tea").map(String::as_str),
        Some("black")
    );
    assert_eq!(config.categories.overrides.get("tofu"), Some(&Category::Produce));
    config.validate().unwrap();
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = PantryConfig::from_toml("[rounding\nvolume = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path == "<string>"));
}

#[test]
fn zero_granularity_rejected() {
    let config = PantryConfig::from_toml("[rounding]\ncount = \"0\"").unwrap();
    let err = config.validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "rounding.count"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_granularity_rejected() {
    let config = PantryConfig::from_toml("[rounding.per_unit]\ncup = \"quarter\"").unwrap();
    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "rounding.per_unit.cup")
    );
}

#[test]
fn granularity_lookup_by_kind() {
    let config = PantryConfig::default();
    let raw = config.rounding.for_kind(UnitKind::Weight);
    let parsed = pantry_core::config::RoundingConfig::parse_granularity("w", raw).unwrap();
    assert_eq!(parsed, Quantity::new(1, 4).unwrap());
}

#[test]
fn unknown_log_level_rejected() {
    let config = PantryConfig::from_toml("[observability]\nlog_level = \"loud\"").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn zero_timeout_rejected() {
    let config = PantryConfig::from_toml("[parser]\ntimeout_secs = 0").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn env_overrides_apply_and_ignore_garbage() {
    let env: HashMap<&str, &str> = [
        ("PANTRY_PARSER_BACKEND", "Ollama"),
        ("PANTRY_PARSER_TIMEOUT_SECS", "not-a-number"),
        ("PANTRY_AGGREGATOR_DISPLAY_UNIT", "first_seen"),
        ("PANTRY_LOG_LEVEL", "DEBUG"),
    ]
    .into_iter()
    .collect();

    let mut config = PantryConfig::default();
    PantryConfig::apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.parser.backend, ParserBackend::Ollama);
    assert_eq!(config.parser.timeout_secs, 5);
    assert_eq!(config.aggregator.display_unit, DisplayUnitPolicy::FirstSeen);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn cli_overrides_win() {
    let mut config = PantryConfig::from_toml("[parser]\nbackend = \"ollama\"").unwrap();
    let cli = CliOverrides {
        parser_backend: Some(ParserBackend::Local),
        display_unit: None,
        log_level: Some("warn".to_string()),
    };
    PantryConfig::apply_cli_overrides(&mut config, &cli);
    assert_eq!(config.parser.backend, ParserBackend::Local);
    assert_eq!(config.observability.log_level, "warn");
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("pantry.toml"),
        "[rounding]\nweight = \"1/2\"\n",
    )
    .unwrap();
    let config = PantryConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.rounding.weight, "1/2");
}

#[test]
fn load_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PantryConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.rounding.weight, "1/4");
}

#[test]
fn load_file_missing_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PantryConfig::load_file(&dir.path().join("nope.toml"), None).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn toml_roundtrip() {
    let config = PantryConfig::default();
    let text = config.to_toml().unwrap();
    let back = PantryConfig::from_toml(&text).unwrap();
    assert_eq!(back.rounding.volume, config.rounding.volume);
    assert_eq!(back.parser.model, config.parser.model);
}
