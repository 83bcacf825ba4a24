// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Role-keyed credential and session persistence.
//!
//! The browser build of this platform kept sessions in local storage
//! under role-specific keys; here that becomes an explicit store with
//! open/login/logout/clear lifecycle, so no code path reads credentials
//! from anywhere else.

pub mod store;

pub use store::{SessionEntry, SessionStore};
