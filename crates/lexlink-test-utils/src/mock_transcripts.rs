// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock transcript source with preset per-case histories.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use lexlink_core::traits::TranscriptSource;
use lexlink_core::{CaseId, ChatMessage, LexlinkError, MessageId, Role};

/// A transcript source backed by a fixed map, with a fetch counter and
/// an optional injected failure.
#[derive(Default)]
pub struct MockTranscriptSource {
    histories: HashMap<CaseId, Vec<ChatMessage>>,
    fetches: Arc<AtomicUsize>,
    fail: bool,
}

impl MockTranscriptSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presets the stored history for a case.
    pub fn with_history(mut self, case: CaseId, messages: Vec<ChatMessage>) -> Self {
        self.histories.insert(case, messages);
        self
    }

    /// Makes every fetch fail, for error-path tests.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Shared counter handle, usable after the source moves into an Arc.
    pub fn fetch_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetches)
    }
}

/// Builds a transcript message with a deterministic timestamp.
pub fn transcript_message(id: i64, case: CaseId, sender: Role, text: &str) -> ChatMessage {
    ChatMessage {
        id: MessageId(id),
        case_id: case,
        sender,
        message: text.to_string(),
        created_at: NaiveDate::from_ymd_opt(2025, 1, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            + chrono::Duration::minutes(id),
    }
}

#[async_trait]
impl TranscriptSource for MockTranscriptSource {
    async fn messages(&self, case: CaseId) -> Result<Vec<ChatMessage>, LexlinkError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LexlinkError::Api {
                message: "transcript fetch failed".into(),
                status: Some(500),
                source: None,
            });
        }
        Ok(self.histories.get(&case).cloned().unwrap_or_default())
    }
}
