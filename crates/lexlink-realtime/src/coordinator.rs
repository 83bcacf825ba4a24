// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session FSM that manages case-scoped realtime membership.
//!
//! Each session goes through states: Disconnected -> Connected(no case)
//! -> Connected(case joined), and back. The coordinator owns the channel
//! handle, so the single-membership invariant and leave-before-join
//! ordering are enforced by construction rather than by call-site
//! discipline:
//!
//! - joining case B while A is joined always emits leave(A) before
//!   join(B); the two memberships are never outstanding together
//! - an inbound message is appended to the transcript only when its
//!   case id matches the joined case; everything else is dropped
//! - teardown emits a leave for the active case before disconnecting
//!
//! Historical transcripts come from the request/response API (the
//! [`TranscriptSource`] seam); the realtime channel only carries live
//! pushes from the counterparty.

use std::sync::Arc;

use tracing::{debug, info, warn};

use lexlink_core::traits::{RealtimeChannel, TranscriptSource};
use lexlink_core::{CaseId, ChatMessage, ClientEvent, LexlinkError, ServerEvent};

/// States in the session FSM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    /// No realtime connection.
    Disconnected,
    /// Connected, with at most one case room joined.
    Connected { joined: Option<CaseId> },
}

impl std::fmt::Display for CoordinatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinatorState::Disconnected => write!(f, "disconnected"),
            CoordinatorState::Connected { joined: None } => write!(f, "connected"),
            CoordinatorState::Connected { joined: Some(case) } => {
                write!(f, "joined case {case}")
            }
        }
    }
}

/// The outcome of one inbound event.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// A message accepted into the active transcript.
    Appended(ChatMessage),
    /// An event for the application layer: call signaling, KYC pushes,
    /// room-membership notices.
    Notice(ServerEvent),
    /// Dropped: a message for another case, or one already present.
    Dropped,
}

/// Manages the realtime membership and transcript buffer for one user
/// session.
pub struct CaseCoordinator {
    channel: Arc<dyn RealtimeChannel>,
    transcripts: Arc<dyn TranscriptSource>,
    state: CoordinatorState,
    transcript: Vec<ChatMessage>,
}

impl CaseCoordinator {
    /// Creates a coordinator in the `Disconnected` state.
    pub fn new(channel: Arc<dyn RealtimeChannel>, transcripts: Arc<dyn TranscriptSource>) -> Self {
        Self {
            channel,
            transcripts,
            state: CoordinatorState::Disconnected,
            transcript: Vec::new(),
        }
    }

    /// A shared handle to the underlying channel, for a receive pump
    /// that feeds [`handle_event`](Self::handle_event) from outside.
    pub fn channel(&self) -> Arc<dyn RealtimeChannel> {
        Arc::clone(&self.channel)
    }

    /// Returns the current FSM state.
    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    /// The joined case, if any.
    pub fn joined_case(&self) -> Option<CaseId> {
        match self.state {
            CoordinatorState::Connected { joined } => joined,
            CoordinatorState::Disconnected => None,
        }
    }

    /// The visible transcript for the joined case.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Establishes the realtime connection. A no-op when already
    /// connected.
    pub async fn connect(&mut self) -> Result<(), LexlinkError> {
        if matches!(self.state, CoordinatorState::Connected { .. }) {
            return Ok(());
        }
        self.channel.connect().await?;
        self.state = CoordinatorState::Connected { joined: None };
        info!("realtime session connected");
        Ok(())
    }

    /// Opens a case for chat: joins its room and replaces the local
    /// transcript with the stored history.
    ///
    /// When another case is open, its room is left first — the leave is
    /// emitted before the join, so the two memberships never overlap.
    /// A failed history fetch leaves the room joined with an empty
    /// transcript and surfaces the error.
    pub async fn open_case(&mut self, case: CaseId) -> Result<(), LexlinkError> {
        let joined = match self.state {
            CoordinatorState::Disconnected => {
                return Err(LexlinkError::Channel {
                    message: "cannot open a case while disconnected".into(),
                    source: None,
                });
            }
            CoordinatorState::Connected { joined } => joined,
        };

        if joined == Some(case) {
            return Ok(());
        }

        if let Some(previous) = joined {
            self.channel
                .send(ClientEvent::LeaveCase { case_id: previous })
                .await?;
            self.transcript.clear();
            self.state = CoordinatorState::Connected { joined: None };
            debug!(case = %previous, "left case room");
        }

        self.channel.send(ClientEvent::JoinCase { case_id: case }).await?;
        self.state = CoordinatorState::Connected { joined: Some(case) };
        info!(case = %case, "joined case room");

        let history = self.transcripts.messages(case).await?;
        self.transcript = history;
        Ok(())
    }

    /// Closes the open case: emits the leave and clears local state.
    pub async fn close_case(&mut self) -> Result<(), LexlinkError> {
        if let CoordinatorState::Connected { joined: Some(case) } = self.state {
            self.channel
                .send(ClientEvent::LeaveCase { case_id: case })
                .await?;
            self.transcript.clear();
            self.state = CoordinatorState::Connected { joined: None };
            debug!(case = %case, "left case room");
        }
        Ok(())
    }

    /// Handles one inbound event.
    ///
    /// A `new_message` is appended only when it belongs to the joined
    /// case and is not already present (the sender's own messages are
    /// recorded from the POST response, so the broadcast echo arrives
    /// as a duplicate). Everything else passes through as a notice.
    pub fn handle_event(&mut self, event: ServerEvent) -> Inbound {
        match event {
            ServerEvent::NewMessage(message) => {
                if self.joined_case() != Some(message.case_id) {
                    debug!(
                        case = %message.case_id,
                        "dropping message for a case that is not open"
                    );
                    return Inbound::Dropped;
                }
                if self.transcript.iter().any(|m| m.id == message.id) {
                    debug!(id = message.id.0, "dropping duplicate message");
                    return Inbound::Dropped;
                }
                self.transcript.push(message.clone());
                Inbound::Appended(message)
            }
            other => Inbound::Notice(other),
        }
    }

    /// Records the sender's own message from a successful send.
    ///
    /// Returns `true` when the message was appended; `false` when no
    /// matching case is open or the message is already present.
    pub fn record_sent(&mut self, message: ChatMessage) -> bool {
        if self.joined_case() != Some(message.case_id) {
            return false;
        }
        if self.transcript.iter().any(|m| m.id == message.id) {
            return false;
        }
        self.transcript.push(message);
        true
    }

    /// Receives the next event from the channel.
    pub async fn next_event(&self) -> Result<ServerEvent, LexlinkError> {
        self.channel.next_event().await
    }

    /// Emits an outbound event unrelated to case membership (call
    /// signaling, the per-client notification room).
    pub async fn send(&self, event: ClientEvent) -> Result<(), LexlinkError> {
        match event {
            ClientEvent::JoinCase { .. } | ClientEvent::LeaveCase { .. } => {
                Err(LexlinkError::Internal(
                    "case membership is managed by open_case/close_case".into(),
                ))
            }
            other => self.channel.send(other).await,
        }
    }

    /// Tears the session down: leaves the active case (best effort),
    /// closes the channel, and clears local state. Idempotent.
    pub async fn shutdown(&mut self) -> Result<(), LexlinkError> {
        if let CoordinatorState::Connected { joined: Some(case) } = self.state {
            if let Err(e) = self
                .channel
                .send(ClientEvent::LeaveCase { case_id: case })
                .await
            {
                warn!(error = %e, case = %case, "leave on teardown failed");
            }
        }

        let result = match self.state {
            CoordinatorState::Disconnected => Ok(()),
            CoordinatorState::Connected { .. } => self.channel.close().await,
        };

        self.state = CoordinatorState::Disconnected;
        self.transcript.clear();
        info!("realtime session disconnected");
        result
    }
}
