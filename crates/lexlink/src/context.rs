// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared command wiring: configuration, session store, API clients.

use lexlink_api::ApiClient;
use lexlink_config::LexlinkConfig;
use lexlink_core::{LexlinkError, Role};
use lexlink_session::SessionStore;

/// Everything a command needs: the loaded config and the opened
/// session store.
pub struct CliContext {
    pub config: LexlinkConfig,
    pub store: SessionStore,
}

impl CliContext {
    pub fn open(config: LexlinkConfig) -> Result<Self, LexlinkError> {
        let store = SessionStore::open(&config.session.resolved_state_dir())?;
        Ok(Self { config, store })
    }

    /// An unauthenticated API client (public endpoints).
    pub fn api(&self) -> Result<ApiClient, LexlinkError> {
        ApiClient::new(&self.config.api)
    }

    /// An API client carrying the stored credential for `role`.
    ///
    /// Errors with `AuthExpired` when the portal has no session; the
    /// caller prints the log-in hint.
    pub fn api_for(&self, role: Role) -> Result<ApiClient, LexlinkError> {
        let token = self.store.credential(role).ok_or(LexlinkError::AuthExpired)?;
        let mut api = self.api()?;
        api.set_token(token);
        Ok(api)
    }

    /// Clears the stored session when the backend rejected its
    /// credential, so the next command goes straight to login.
    pub fn forget_if_expired(&mut self, role: Role, err: &LexlinkError) {
        if err.is_auth() {
            if let Ok(true) = self.store.logout(role) {
                eprintln!("session for {role} expired, log in again");
            }
        }
    }
}
