// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Lexlink client engine.
//!
//! This crate provides the foundational error type, domain types, and
//! trait seams used throughout the Lexlink workspace. The realtime
//! coordinator and the API client both program against the traits
//! defined here.

pub mod error;
pub mod optimistic;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::LexlinkError;
pub use types::{
    Appointment, AppointmentId, AppointmentStatus, CaseId, ChatMessage, ClientEvent, ClientId,
    KycStatus, LawyerId, MessageId, Role, ServerEvent,
};

pub use traits::{RealtimeChannel, TranscriptSource};
