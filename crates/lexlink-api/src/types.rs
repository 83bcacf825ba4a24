// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the backend's request/response API.
//!
//! Payload shapes are dictated by the backend; fields the engine never
//! reads stay unmodeled. Everything here derives `Deserialize` with
//! permissive defaults so contract additions don't break the client.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use lexlink_core::types::wall_clock;
use lexlink_core::{ClientId, KycStatus, LawyerId, Role};

/// Login/registration request body, shared by all three portals.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request for a client account.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterClient {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Registration request for a lawyer account.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterLawyer {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A successful login: the bearer token plus the account's display profile.
#[derive(Debug, Clone)]
pub struct AccountSession {
    pub token: String,
    pub profile: serde_json::Value,
}

/// A lawyer record as served by the public directory and profile endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawyerRecord {
    pub id: LawyerId,
    pub name: String,
    pub specialization: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    /// "Available" or "Busy"; busy lawyers do not accept bookings.
    pub availability_status: Option<String>,
    /// Daily booking window as "HH:MM" strings; absent means unconstrained.
    pub working_hours_start: Option<String>,
    pub working_hours_end: Option<String>,
    pub rating: Option<f64>,
    pub pro_bono_availability: Option<bool>,
    pub profile_picture: Option<String>,
}

impl LawyerRecord {
    /// True unless the profile is explicitly marked busy.
    pub fn accepts_bookings(&self) -> bool {
        self.availability_status.as_deref() != Some("Busy")
    }
}

/// Directory search filters; empty fields are omitted from the query.
#[derive(Debug, Clone, Default)]
pub struct LawyerFilters {
    pub specialization: Option<String>,
    pub location: Option<String>,
    pub availability_status: Option<String>,
    pub min_rating: Option<f64>,
    pub pro_bono: Option<bool>,
}

impl LawyerFilters {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(v) = &self.specialization {
            q.push(("specialization", v.clone()));
        }
        if let Some(v) = &self.location {
            q.push(("location", v.clone()));
        }
        if let Some(v) = &self.availability_status {
            q.push(("availability_status", v.clone()));
        }
        if let Some(v) = self.min_rating {
            q.push(("min_rating", v.to_string()));
        }
        if let Some(v) = self.pro_bono {
            q.push(("pro_bono_availability", v.to_string()));
        }
        q
    }
}

/// A review left on a lawyer's profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Review {
    pub rating: f64,
    pub comment: Option<String>,
    pub client_name: Option<String>,
    pub created_at: Option<String>,
}

/// Review submission body.
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub lawyer_id: LawyerId,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A case as served by the list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CaseSummary {
    pub id: lexlink_core::CaseId,
    pub title: String,
    pub status: Option<String>,
    pub case_type: Option<String>,
    pub description: Option<String>,
    pub client_id: Option<ClientId>,
    pub lawyer_id: Option<LawyerId>,
    pub client_name: Option<String>,
    pub lawyer_name: Option<String>,
}

/// Case creation body (lawyer portal).
#[derive(Debug, Clone, Serialize)]
pub struct NewCase {
    pub client_id: ClientId,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type: Option<String>,
}

/// A timeline entry added to a case.
#[derive(Debug, Clone, Serialize)]
pub struct NewTimelineEvent {
    pub event: String,
    #[serde(with = "wall_clock")]
    pub event_date: NaiveDateTime,
}

/// Evidence metadata added to a case.
#[derive(Debug, Clone, Serialize)]
pub struct NewEvidence {
    pub description: String,
}

/// A KYC submission from a lawyer.
#[derive(Debug, Clone, Serialize)]
pub struct KycSubmission {
    pub full_name: String,
    pub id_number: String,
    pub address: String,
}

/// A KYC verification row in the admin review queue.
#[derive(Debug, Clone, Deserialize)]
pub struct KycRecord {
    pub id: i64,
    pub lawyer_id: LawyerId,
    #[serde(default)]
    pub lawyer_name: Option<String>,
    pub status: KycStatus,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// A downloadable document template.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentTemplate {
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Internal wire row for case messages; the backend omits `case_id` on
/// the REST transcript, so the caller reattaches it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageRow {
    pub id: lexlink_core::MessageId,
    pub sender: Role,
    pub message: String,
    #[serde(with = "wall_clock")]
    pub created_at: NaiveDateTime,
}

impl MessageRow {
    pub(crate) fn into_message(self, case_id: lexlink_core::CaseId) -> lexlink_core::ChatMessage {
        lexlink_core::ChatMessage {
            id: self.id,
            case_id,
            sender: self.sender,
            message: self.message,
            created_at: self.created_at,
        }
    }
}
