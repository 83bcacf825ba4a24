// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: URL schemes, positive timeouts, known log levels.

use crate::diagnostic::ConfigError;
use crate::model::LexlinkConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &LexlinkConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.client.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "client.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.client.log_level
            ),
        });
    }

    let api_url = config.api.base_url.trim();
    if api_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("api.base_url `{api_url}` must start with http:// or https://"),
        });
    }
    if api_url.ends_with('/') {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not have a trailing slash".to_string(),
        });
    }

    if config.api.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "api.timeout_secs must be at least 1".to_string(),
        });
    }

    let rt_url = config.realtime.url.trim();
    if rt_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "realtime.url must not be empty".to_string(),
        });
    } else if !rt_url.starts_with("ws://") && !rt_url.starts_with("wss://") {
        errors.push(ConfigError::Validation {
            message: format!("realtime.url `{rt_url}` must start with ws:// or wss://"),
        });
    }

    if config.realtime.connect_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "realtime.connect_timeout_secs must be at least 1".to_string(),
        });
    }

    let room_url = config.conference.room_base_url.trim();
    if !room_url.is_empty() && !room_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("conference.room_base_url `{room_url}` must start with https://"),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
