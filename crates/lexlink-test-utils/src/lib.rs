// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Lexlink integration tests.
//!
//! Mock implementations of the core trait seams, used by the realtime
//! coordinator tests and the workspace end-to-end tests.

pub mod mock_channel;
pub mod mock_transcripts;

pub use mock_channel::{MockChannel, MockChannelHandles};
pub use mock_transcripts::{MockTranscriptSource, transcript_message};
