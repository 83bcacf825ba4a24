// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conference credential endpoint.
//!
//! The video call itself runs on a third-party conferencing embed; this
//! client only obtains the signed per-appointment room credential the
//! embed is parameterized with.

use serde::Deserialize;

use lexlink_core::{AppointmentId, LexlinkError, Role};

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct JwtEnvelope {
    jwt: String,
}

impl ApiClient {
    /// Fetches a signed conference credential for an appointment's room.
    pub async fn conference_credential(
        &self,
        appointment_id: AppointmentId,
        role: Role,
        display_name: &str,
    ) -> Result<String, LexlinkError> {
        let envelope: JwtEnvelope = self
            .post_json(
                "/api/get-jaas-jwt",
                &serde_json::json!({
                    "appointment_id": appointment_id,
                    "user_type": role.to_string(),
                    "user_name": display_name,
                }),
            )
            .await?;
        Ok(envelope.jwt)
    }
}
