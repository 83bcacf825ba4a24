// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the coordinator, the API client, and tests.
//!
//! Both traits use `#[async_trait]` for dynamic dispatch compatibility.

pub mod channel;
pub mod transcript;

pub use channel::RealtimeChannel;
pub use transcript::TranscriptSource;
