// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Lexlink configuration system.

use lexlink_config::diagnostic::ConfigError;
use lexlink_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_lexlink_config() {
    let toml = r#"
[client]
name = "test-client"
log_level = "debug"

[api]
base_url = "https://api.example.com"
timeout_secs = 15
max_retries = 2

[realtime]
url = "wss://api.example.com/realtime"
connect_timeout_secs = 5

[session]
state_dir = "/tmp/lexlink-test"

[conference]
room_base_url = "https://meet.example.com"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.client.name, "test-client");
    assert_eq!(config.client.log_level, "debug");
    assert_eq!(config.api.base_url, "https://api.example.com");
    assert_eq!(config.api.timeout_secs, 15);
    assert_eq!(config.api.max_retries, 2);
    assert_eq!(config.realtime.url, "wss://api.example.com/realtime");
    assert_eq!(config.realtime.connect_timeout_secs, 5);
    assert_eq!(
        config.session.state_dir.as_deref(),
        Some(std::path::Path::new("/tmp/lexlink-test"))
    );
    assert_eq!(config.conference.room_base_url, "https://meet.example.com");
}

/// Empty TOML yields the compiled defaults.
#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.client.name, "lexlink");
    assert_eq!(config.client.log_level, "info");
    assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.api.max_retries, 1);
    assert!(config.session.state_dir.is_none());
}

/// Unknown field in [api] produces an UnknownKey error with a suggestion.
#[test]
fn unknown_field_produces_suggestion() {
    let toml = r#"
[api]
base_ur = "https://api.example.com"
"#;

    let errors = load_and_validate_str(toml).expect_err("typo should be rejected");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "base_ur" && suggestion.as_deref() == Some("base_url")
    )));
}

/// Wrong value type produces an InvalidType error.
#[test]
fn wrong_type_produces_invalid_type_error() {
    let toml = r#"
[api]
timeout_secs = "thirty"
"#;

    let errors = load_and_validate_str(toml).expect_err("string timeout should be rejected");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. }))
    );
}

/// Semantic validation runs after deserialization.
#[test]
fn validation_rejects_bad_realtime_scheme() {
    let toml = r#"
[realtime]
url = "http://127.0.0.1:5000/realtime"
"#;

    let errors = load_and_validate_str(toml).expect_err("http realtime url should be rejected");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("realtime.url")
    )));
}

/// The resolved state dir falls back to the platform data directory.
#[test]
fn state_dir_resolution_prefers_explicit_value() {
    let config = load_config_from_str("[session]\nstate_dir = \"/tmp/x\"\n").unwrap();
    assert_eq!(
        config.session.resolved_state_dir(),
        std::path::PathBuf::from("/tmp/x")
    );

    let config = load_config_from_str("").unwrap();
    let resolved = config.session.resolved_state_dir();
    assert!(resolved.ends_with("lexlink"));
}
