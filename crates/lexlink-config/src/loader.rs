// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./lexlink.toml` > `~/.config/lexlink/lexlink.toml`
//! > `/etc/lexlink/lexlink.toml`, with environment variable overrides via
//! the `LEXLINK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::LexlinkConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/lexlink/lexlink.toml` (system-wide)
/// 3. `~/.config/lexlink/lexlink.toml` (user XDG config)
/// 4. `./lexlink.toml` (local directory)
/// 5. `LEXLINK_*` environment variables
pub fn load_config() -> Result<LexlinkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LexlinkConfig::default()))
        .merge(Toml::file("/etc/lexlink/lexlink.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("lexlink/lexlink.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("lexlink.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<LexlinkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LexlinkConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LexlinkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LexlinkConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so keys that contain
/// underscores stay unambiguous: `LEXLINK_API_BASE_URL` must map to
/// `api.base_url`, not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("LEXLINK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: LEXLINK_API_BASE_URL -> "api_base_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("client_", "client.", 1)
            .replacen("api_", "api.", 1)
            .replacen("realtime_", "realtime.", 1)
            .replacen("session_", "session.", 1)
            .replacen("conference_", "conference.", 1);
        mapped.into()
    })
}
