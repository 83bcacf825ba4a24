// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Lexlink client engine.

use thiserror::Error;

/// The primary error type used across all Lexlink crates.
///
/// Variants follow the failure taxonomy of the platform client: input
/// validation before any network call, credential expiry, missing
/// resources, booking races surfaced at submission time, and the
/// transport-level failures underneath them.
#[derive(Debug, Error)]
pub enum LexlinkError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Input rejected before any network call (empty/malformed form fields).
    #[error("validation error: {0}")]
    Validation(String),

    /// The backend rejected the stored credential (401/403). Callers clear
    /// the session entry for the role and route back to login.
    #[error("credential rejected or expired, log in again")]
    AuthExpired,

    /// The requested resource does not exist (404).
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// The requested appointment slot was taken by a concurrent booking (409).
    #[error("slot conflict: {message}")]
    SlotConflict { message: String },

    /// Other request/response API failures.
    #[error("api error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Realtime channel errors (connect failure, frame format, closed stream).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Session store I/O or serialization errors.
    #[error("session store error: {source}")]
    Store {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LexlinkError {
    /// True for failures that invalidate the stored credential.
    pub fn is_auth(&self) -> bool {
        matches!(self, LexlinkError::AuthExpired)
    }
}
