// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Appointment slot availability for the Lexlink client engine.
//!
//! The client-side mirror of the backend's booking rules: a candidate
//! slot must fall inside the lawyer's working hours and keep a
//! 30-minute clearance from every existing booking. The backend remains
//! authoritative — its transactional check catches the races this
//! mirror cannot see.

pub mod availability;

pub use availability::{
    CONFLICT_WINDOW_SECS, SlotAssessment, SlotPlanner, WorkingHours, assess, first_conflict,
};
