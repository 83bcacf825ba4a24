// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Realtime channel client and case-session coordination.
//!
//! [`WsChannel`] speaks the backend's JSON-event-over-websocket
//! protocol; [`CaseCoordinator`] wraps any [`lexlink_core::RealtimeChannel`]
//! in the session FSM that enforces single case membership,
//! leave-before-join ordering, and transcript filtering.

pub mod coordinator;
pub mod ws;

pub use coordinator::{CaseCoordinator, CoordinatorState, Inbound};
pub use ws::WsChannel;
