use truthlens_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TruthlensConfig::from_toml("").unwrap();

    assert!(config.engine.reject_in_flight);
    assert_eq!(config.store.timeout_ms, 10_000);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[engine]
reject_in_flight = false

[observability]
log_level = "debug"
"#;
    let config = TruthlensConfig::from_toml(toml).unwrap();
    assert!(!config.engine.reject_in_flight);
    assert_eq!(config.observability.log_level, "debug");
    // Non-overridden fields keep defaults
    assert!(config.observability.json_logs);
    assert_eq!(config.store.timeout_ms, 10_000);
}

#[test]
fn store_timeout_converts_to_duration() {
    let config = TruthlensConfig::from_toml("[store]\ntimeout_ms = 1500\n").unwrap();
    assert_eq!(config.store.timeout(), std::time::Duration::from_millis(1500));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = TruthlensConfig::from_toml("[store]\ntimeout_ms = 0\n").unwrap_err();
    assert!(err.to_string().contains("timeout_ms"));
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = TruthlensConfig::from_toml("[store\n").unwrap_err();
    assert!(matches!(err, truthlens_core::TruthlensError::Config { .. }));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = TruthlensConfig::from_file("/nonexistent/truthlens.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/truthlens.toml"));
}

#[test]
fn config_serde_roundtrip() {
    let config = TruthlensConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = TruthlensConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.store.timeout_ms, config.store.timeout_ms);
    assert_eq!(
        roundtripped.observability.log_level,
        config.observability.log_level
    );
}
