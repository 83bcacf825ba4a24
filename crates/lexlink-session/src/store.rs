// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session store lifecycle: open, login, lookup, logout, clear.
//!
//! One file holds the credentials and display data for every role a
//! user is logged in as (client, lawyer, admin are independent
//! sessions). Tokens live in memory as `SecretString` and are never
//! logged; on disk the file is written with owner-only permissions.
//! Presence of a credential is what gates the protected CLI views.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lexlink_core::{LexlinkError, Role};

const SESSION_FILE: &str = "sessions.json";

/// One role's stored session.
pub struct SessionEntry {
    token: SecretString,
    /// The backend account id for this role.
    pub account_id: i64,
    /// Display name shown in prompts and notifications.
    pub display_name: String,
}

impl SessionEntry {
    pub fn token(&self) -> SecretString {
        self.token.clone()
    }
}

impl std::fmt::Debug for SessionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEntry")
            .field("token", &"[REDACTED]")
            .field("account_id", &self.account_id)
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// On-disk form of one entry.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    token: String,
    account_id: i64,
    display_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSessions {
    #[serde(default)]
    sessions: HashMap<Role, StoredEntry>,
}

/// The opened session store.
pub struct SessionStore {
    path: PathBuf,
    entries: HashMap<Role, SessionEntry>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .field("roles", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SessionStore {
    /// Opens (or initializes) the store under `state_dir`.
    ///
    /// An unreadable or corrupt session file is discarded with a
    /// warning rather than locking the user out; they log in again.
    pub fn open(state_dir: &Path) -> Result<Self, LexlinkError> {
        std::fs::create_dir_all(state_dir).map_err(store_err)?;
        let path = state_dir.join(SESSION_FILE);

        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoredSessions>(&raw) {
                Ok(stored) => stored
                    .sessions
                    .into_iter()
                    .map(|(role, e)| {
                        (
                            role,
                            SessionEntry {
                                token: SecretString::from(e.token),
                                account_id: e.account_id,
                                display_name: e.display_name,
                            },
                        )
                    })
                    .collect(),
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "corrupt session file, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(store_err(e)),
        };

        debug!(path = %path.display(), roles = entries.len(), "session store opened");
        Ok(Self { path, entries })
    }

    /// Stores a fresh login for `role` and persists.
    pub fn login(
        &mut self,
        role: Role,
        token: SecretString,
        account_id: i64,
        display_name: String,
    ) -> Result<(), LexlinkError> {
        self.entries.insert(
            role,
            SessionEntry {
                token,
                account_id,
                display_name,
            },
        );
        self.persist()
    }

    /// The stored credential for `role`, if logged in.
    pub fn credential(&self, role: Role) -> Option<SecretString> {
        self.entries.get(&role).map(|e| e.token.clone())
    }

    /// The stored session entry for `role`.
    pub fn entry(&self, role: Role) -> Option<&SessionEntry> {
        self.entries.get(&role)
    }

    /// Roles with a stored credential.
    pub fn logged_in_roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.entries.keys().copied().collect();
        roles.sort_by_key(|r| r.to_string());
        roles
    }

    /// Removes the session for `role` (logout, or after the backend
    /// rejects the credential). Returns whether one existed.
    pub fn logout(&mut self, role: Role) -> Result<bool, LexlinkError> {
        let existed = self.entries.remove(&role).is_some();
        self.persist()?;
        Ok(existed)
    }

    /// Teardown: removes every session and the file behind them.
    pub fn clear_all(&mut self) -> Result<(), LexlinkError> {
        self.entries.clear();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(store_err(e)),
        }
    }

    fn persist(&self) -> Result<(), LexlinkError> {
        let stored = StoredSessions {
            sessions: self
                .entries
                .iter()
                .map(|(role, e)| {
                    (
                        *role,
                        StoredEntry {
                            token: e.token.expose_secret().to_string(),
                            account_id: e.account_id,
                            display_name: e.display_name.clone(),
                        },
                    )
                })
                .collect(),
        };

        let raw = serde_json::to_string_pretty(&stored).map_err(|e| LexlinkError::Store {
            source: Box::new(e),
        })?;
        std::fs::write(&self.path, raw).map_err(store_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(store_err)?;
        }

        Ok(())
    }
}

fn store_err(e: std::io::Error) -> LexlinkError {
    LexlinkError::Store {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::open(dir.path()).unwrap()
    }

    #[test]
    fn login_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = open_in(&dir);
            store
                .login(
                    Role::Client,
                    SecretString::from("tok-client".to_string()),
                    3,
                    "Chandra".into(),
                )
                .unwrap();
        }

        let store = open_in(&dir);
        let entry = store.entry(Role::Client).expect("entry should survive reopen");
        assert_eq!(entry.account_id, 3);
        assert_eq!(entry.display_name, "Chandra");
        assert_eq!(store.credential(Role::Client).unwrap().expose_secret(), "tok-client");
        assert!(store.credential(Role::Lawyer).is_none());
    }

    #[test]
    fn roles_are_independent_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_in(&dir);
        store
            .login(Role::Client, SecretString::from("a".to_string()), 1, "C".into())
            .unwrap();
        store
            .login(Role::Lawyer, SecretString::from("b".to_string()), 2, "L".into())
            .unwrap();

        assert_eq!(store.logged_in_roles(), vec![Role::Client, Role::Lawyer]);

        assert!(store.logout(Role::Client).unwrap());
        assert!(store.credential(Role::Client).is_none());
        assert!(store.credential(Role::Lawyer).is_some());
    }

    #[test]
    fn logout_of_absent_role_reports_false() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_in(&dir);
        assert!(!store.logout(Role::Admin).unwrap());
    }

    #[test]
    fn clear_all_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_in(&dir);
        store
            .login(Role::Admin, SecretString::from("t".to_string()), 1, "A".into())
            .unwrap();
        store.clear_all().unwrap();

        assert!(store.logged_in_roles().is_empty());
        assert!(!dir.path().join(SESSION_FILE).exists());

        // Idempotent.
        store.clear_all().unwrap();
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();

        let store = open_in(&dir);
        assert!(store.logged_in_roles().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let mut store = open_in(&dir);
        store
            .login(Role::Client, SecretString::from("t".to_string()), 1, "C".into())
            .unwrap();

        let mode = std::fs::metadata(dir.path().join(SESSION_FILE))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_in(&dir);
        store
            .login(Role::Client, SecretString::from("tok-secret".to_string()), 1, "C".into())
            .unwrap();

        let rendered = format!("{:?}", store.entry(Role::Client).unwrap());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("tok-secret"));
    }
}
