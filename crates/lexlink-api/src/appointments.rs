// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Appointment booking and lifecycle endpoints.

use chrono::NaiveDateTime;
use serde::Deserialize;

use lexlink_core::{Appointment, AppointmentId, AppointmentStatus, LawyerId, LexlinkError};

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct AppointmentsEnvelope {
    #[serde(default)]
    appointments: Vec<Appointment>,
}

#[derive(Debug, Deserialize)]
struct BookedEnvelope {
    appointment: Appointment,
}

impl ApiClient {
    /// Books an appointment with a lawyer.
    ///
    /// The backend re-checks the 30-minute conflict window inside a
    /// transaction; a race between two clients surfaces here as
    /// [`LexlinkError::SlotConflict`] even when the local check passed.
    pub async fn book_appointment(
        &self,
        lawyer_id: LawyerId,
        at: NaiveDateTime,
    ) -> Result<Appointment, LexlinkError> {
        let envelope: BookedEnvelope = self
            .post_json(
                "/api/book-appointment",
                &serde_json::json!({
                    "lawyer_id": lawyer_id,
                    "appointment_date": at.format("%Y-%m-%dT%H:%M:%S").to_string(),
                }),
            )
            .await?;
        Ok(envelope.appointment)
    }

    /// Lists a lawyer's appointments. Public — the booking flow reads
    /// this before the client is logged in.
    pub async fn lawyer_appointments(
        &self,
        lawyer_id: LawyerId,
    ) -> Result<Vec<Appointment>, LexlinkError> {
        let envelope: AppointmentsEnvelope = self
            .get_json(&format!("/api/lawyer-appointments/{}", lawyer_id.0))
            .await?;
        Ok(envelope.appointments)
    }

    /// The timestamps that block new bookings for a lawyer: everything
    /// not cancelled. Feed straight into the slot planner.
    pub async fn booked_times(
        &self,
        lawyer_id: LawyerId,
    ) -> Result<Vec<NaiveDateTime>, LexlinkError> {
        let appointments = self.lawyer_appointments(lawyer_id).await?;
        Ok(appointments
            .into_iter()
            .filter(|a| a.status != AppointmentStatus::Cancelled)
            .map(|a| a.appointment_date)
            .collect())
    }

    /// Lists the authenticated client's appointments.
    pub async fn client_appointments(&self) -> Result<Vec<Appointment>, LexlinkError> {
        let envelope: AppointmentsEnvelope = self.get_json("/api/client-appointments").await?;
        Ok(envelope.appointments)
    }

    /// Moves an appointment to a new status (lawyer confirm/cancel,
    /// completion). Completed appointments are terminal; that
    /// transition is rejected before any network call.
    pub async fn update_appointment_status(
        &self,
        id: AppointmentId,
        current: AppointmentStatus,
        new_status: AppointmentStatus,
    ) -> Result<serde_json::Value, LexlinkError> {
        if current.is_terminal() {
            return Err(LexlinkError::Validation(
                "completed appointments cannot change status".into(),
            ));
        }
        self.put_json(
            &format!("/api/update-appointment-status/{}", id.0),
            &serde_json::json!({"status": new_status}),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use chrono::NaiveDate;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn jan10(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn booking_sends_wall_clock_timestamp_and_decodes_row() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/book-appointment"))
            .and(body_partial_json(
                serde_json::json!({"lawyer_id": 4, "appointment_date": "2025-01-10T10:45:00"}),
            ))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "message": "Appointment booked successfully",
                "appointment": {
                    "id": 12,
                    "appointment_date": "2025-01-10T10:45:00+05:45",
                    "status": "pending",
                    "lawyer_name": "B. Bista",
                    "client_name": "Chandra"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let appointment = client
            .book_appointment(LawyerId(4), jan10(10, 45))
            .await
            .unwrap();

        assert_eq!(appointment.id, AppointmentId(12));
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.appointment_date, jan10(10, 45));
    }

    #[tokio::test]
    async fn booked_times_exclude_cancelled_appointments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/lawyer-appointments/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "appointments": [
                    {"id": 1, "appointment_date": "2025-01-10T10:00:00", "status": "confirmed"},
                    {"id": 2, "appointment_date": "2025-01-10T11:00:00", "status": "cancelled"},
                    {"id": 3, "appointment_date": "2025-01-10T14:00:00", "status": "pending"}
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let times = client.booked_times(LawyerId(4)).await.unwrap();
        assert_eq!(times, vec![jan10(10, 0), jan10(14, 0)]);
    }

    #[tokio::test]
    async fn completed_appointments_refuse_status_updates() {
        let client = test_client("http://127.0.0.1:9");
        let err = client
            .update_appointment_status(
                AppointmentId(9),
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LexlinkError::Validation(_)));
    }
}
