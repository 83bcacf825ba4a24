// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Lexlink workspace.
//!
//! Timestamps are platform-local wall-clock times ([`chrono::NaiveDateTime`]);
//! the backend stores and serves them without an offset.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Serde adapter for the backend's timestamp strings.
///
/// The backend serves both naive ISO timestamps (rows straight from the
/// database) and offset-carrying RFC 3339 ones (values it localized
/// before storing). Both decode to the wall-clock time in the platform's
/// zone; encoding always emits the naive form.
pub mod wall_clock {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
    }

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(de)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a legal case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(pub i64);

/// Unique identifier for a lawyer account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LawyerId(pub i64);

/// Unique identifier for a client account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub i64);

/// Unique identifier for an appointment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub i64);

/// Unique identifier for a chat message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub i64);

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for LawyerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The portal a session belongs to. Credentials are stored per role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Lawyer,
    Admin,
}

/// Appointment lifecycle states.
///
/// Created as `Pending` by a client booking request, moved by lawyer
/// confirm/cancel actions, and immutable once `Completed`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    /// Completed appointments accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, AppointmentStatus::Completed)
    }
}

/// KYC verification states for a lawyer account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Pending,
    Submitted,
    Approved,
    Rejected,
}

/// A booked or requested appointment as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    #[serde(with = "wall_clock")]
    pub appointment_date: NaiveDateTime,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub lawyer_name: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
}

/// A single case-scoped chat message. Append-only, ordered by `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub case_id: CaseId,
    pub sender: Role,
    pub message: String,
    #[serde(with = "wall_clock")]
    pub created_at: NaiveDateTime,
}

/// An event sent by the client over the realtime channel.
///
/// Wire format is a JSON frame of the shape
/// `{"event": "join_case", "data": {"case_id": 5}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Enter the case-scoped room; subsequent `new_message` events for
    /// this case will be delivered.
    JoinCase { case_id: CaseId },
    /// Leave the case-scoped room.
    LeaveCase { case_id: CaseId },
    /// Enter the per-client notification room (call signaling, pushes).
    JoinClientRoom { client_id: ClientId },
    /// Ask the backend to signal an incoming call to the client.
    InitiateCall {
        appointment_id: AppointmentId,
        client_id: ClientId,
        lawyer_name: String,
    },
}

/// An event received from the backend over the realtime channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A chat message sent by the other party in a joined case room.
    NewMessage(ChatMessage),
    /// Informational room-membership notice.
    Status { message: String },
    /// Call signaling: the counterparty started a video consultation.
    IncomingCall {
        #[serde(rename = "appointmentId")]
        appointment_id: AppointmentId,
        #[serde(rename = "clientJwt")]
        client_jwt: String,
        #[serde(rename = "lawyerJwt")]
        lawyer_jwt: String,
    },
    /// Call signaling failed.
    CallError { message: String },
    /// An admin changed this lawyer's KYC status.
    KycStatusUpdated { kyc_status: KycStatus },
}
