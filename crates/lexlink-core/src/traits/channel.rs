// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Realtime channel trait for the backend's push connection.

use async_trait::async_trait;

use crate::error::LexlinkError;
use crate::types::{ClientEvent, ServerEvent};

/// A bidirectional realtime connection to the backend.
///
/// One connection per user session. Room membership (case rooms, the
/// per-client notification room) is expressed through [`ClientEvent`]
/// frames; the backend pushes [`ServerEvent`] frames for the rooms the
/// connection has joined.
#[async_trait]
pub trait RealtimeChannel: Send + Sync {
    /// Establishes the connection, attaching the stored credential.
    async fn connect(&self) -> Result<(), LexlinkError>;

    /// Sends an event frame to the backend.
    async fn send(&self, event: ClientEvent) -> Result<(), LexlinkError>;

    /// Receives the next event pushed by the backend.
    ///
    /// Returns `Err(LexlinkError::Channel {..})` once the connection is
    /// closed; callers treat that as teardown, not a transient failure.
    async fn next_event(&self) -> Result<ServerEvent, LexlinkError>;

    /// Closes the connection, releasing the underlying socket.
    async fn close(&self) -> Result<(), LexlinkError>;
}
