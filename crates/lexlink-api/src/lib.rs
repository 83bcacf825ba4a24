// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed REST client for the legal-aid platform backend.
//!
//! All payload shapes are dictated by the backend and treated as JSON
//! contracts; this crate wraps them in typed endpoint methods grouped
//! by resource. The transport layer ([`client::ApiClient`]) owns bearer
//! authentication, transient-error retry, and mapping of error bodies
//! into [`lexlink_core::LexlinkError`].
//!
//! Historical chat transcripts are served here (the realtime channel
//! only carries live pushes), so [`ApiClient`] implements
//! [`lexlink_core::TranscriptSource`] for the case coordinator.

pub mod admin;
pub mod appointments;
pub mod auth;
pub mod cases;
pub mod client;
pub mod conference;
pub mod directory;
pub mod kyc;
pub mod types;

pub use client::ApiClient;
pub use types::{
    AccountSession, CaseSummary, Credentials, DocumentTemplate, KycRecord, KycSubmission,
    LawyerFilters, LawyerRecord, NewCase, NewEvidence, NewReview, NewTimelineEvent,
    RegisterClient, RegisterLawyer, Review,
};
