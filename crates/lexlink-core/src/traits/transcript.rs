// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transcript source trait — historical messages come over the
//! request/response API, never the realtime channel.

use async_trait::async_trait;

use crate::error::LexlinkError;
use crate::types::{CaseId, ChatMessage};

/// Fetches the stored transcript for a case.
///
/// Implemented by the API client; mocked in coordinator tests.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Returns the full message history for `case`, ordered by creation time.
    async fn messages(&self, case: CaseId) -> Result<Vec<ChatMessage>, LexlinkError>;
}
