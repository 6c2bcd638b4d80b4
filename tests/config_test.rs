//! Configuration loading and validation tests.

use std::io::Write;

use load_generator::config::loader::{load_config, ConfigError};
use load_generator::config::validation::{validate_config, ValidationError};
use load_generator::config::AppConfig;

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&AppConfig::default()).is_ok());
}

#[test]
fn test_invalid_bind_address_is_rejected() {
    let mut config = AppConfig::default();
    config.listener.bind_address = "not-an-address".to_string();

    let errors = validate_config(&config).unwrap_err();
    assert!(errors
        .iter()
        .any(|e| matches!(e, ValidationError::InvalidBindAddress(_))));
}

#[test]
fn test_request_timeout_must_exceed_cpu_duration() {
    let mut config = AppConfig::default();
    config.load.cpu_duration_secs = 30;
    config.timeouts.request_secs = 30;

    let errors = validate_config(&config).unwrap_err();
    assert!(errors
        .iter()
        .any(|e| matches!(e, ValidationError::RequestTimeoutTooShort { .. })));
}

#[test]
fn test_non_http_outbound_url_is_rejected() {
    let mut config = AppConfig::default();
    config.load.outbound_url = "ftp://example.com".to_string();

    let errors = validate_config(&config).unwrap_err();
    assert!(errors
        .iter()
        .any(|e| matches!(e, ValidationError::InvalidOutboundUrl(_))));
}

#[test]
fn test_zero_sizes_are_rejected_together() {
    let mut config = AppConfig::default();
    config.load.memory_chunk_bytes = 0;
    config.load.disk_file_bytes = 0;

    // All errors reported in one pass, not just the first
    let errors = validate_config(&config).unwrap_err();
    assert_eq!(
        errors
            .iter()
            .filter(|e| matches!(e, ValidationError::ZeroSize(_)))
            .count(),
        2
    );
}

#[test]
fn test_load_config_from_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[listener]
bind_address = "127.0.0.1:9999"

[load]
cpu_duration_secs = 1
memory_chunk_bytes = 1048576

[observability]
metrics_enabled = false
"#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.listener.bind_address, "127.0.0.1:9999");
    assert_eq!(config.load.cpu_duration_secs, 1);
    assert_eq!(config.load.memory_chunk_bytes, 1_048_576);
    // Unspecified sections fall back to defaults
    assert_eq!(config.load.disk_file_bytes, 10 * 1024 * 1024);
    assert_eq!(config.timeouts.request_secs, 30);
}

#[test]
fn test_load_config_rejects_semantic_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[load]
cpu_duration_secs = 60

[timeouts]
request_secs = 30
"#
    )
    .unwrap();

    match load_config(file.path()) {
        Err(ConfigError::Validation(errors)) => assert!(!errors.is_empty()),
        other => panic!("expected validation failure, got {:?}", other),
    }
}
