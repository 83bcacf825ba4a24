// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Lexlink client engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject
//! unrecognized config keys at startup with an actionable message.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Lexlink configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to values
/// that work against a local backend.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LexlinkConfig {
    /// Client identity and logging.
    #[serde(default)]
    pub client: ClientConfig,

    /// Request/response API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Realtime channel settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,

    /// Session store settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Video conference embed settings.
    #[serde(default)]
    pub conference: ConferenceConfig,
}

/// Client identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Display name used in the CLI prompt.
    #[serde(default = "default_client_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            name: default_client_name(),
            log_level: default_log_level(),
        }
    }
}

/// Request/response API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the backend API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries after a transient failure (429/500/503).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

/// Realtime channel configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RealtimeConfig {
    /// WebSocket URL of the backend's realtime endpoint.
    #[serde(default = "default_realtime_url")]
    pub url: String,

    /// Handshake timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            url: default_realtime_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Session store configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Directory holding the session file. Defaults to the platform
    /// data directory (`~/.local/share/lexlink` on Linux).
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

impl SessionConfig {
    /// Resolves the effective state directory.
    pub fn resolved_state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("lexlink")
        })
    }
}

/// Video conference embed configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConferenceConfig {
    /// Base URL of the conferencing provider; the per-appointment room
    /// path and signed credential are appended by the caller.
    #[serde(default = "default_conference_base_url")]
    pub room_base_url: String,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            room_base_url: default_conference_base_url(),
        }
    }
}

fn default_client_name() -> String {
    "lexlink".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    1
}

fn default_realtime_url() -> String {
    "ws://127.0.0.1:5000/realtime".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_conference_base_url() -> String {
    "https://8x8.vc".to_string()
}
