// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the Lexlink engine.
//!
//! Each test wires real engine components (API client, slot planner,
//! case coordinator, session store) against a wiremock backend and the
//! mock realtime channel. Tests are independent and order-insensitive.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use secrecy::SecretString;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lexlink_api::ApiClient;
use lexlink_booking::{SlotPlanner, WorkingHours};
use lexlink_config::model::ApiConfig;
use lexlink_core::traits::TranscriptSource;
use lexlink_core::{
    CaseId, ChatMessage, ClientEvent, LawyerId, LexlinkError, MessageId, Role, ServerEvent,
};
use lexlink_realtime::{CaseCoordinator, Inbound};
use lexlink_session::SessionStore;
use lexlink_test_utils::MockChannel;

fn api_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        max_retries: 0,
    })
    .unwrap()
}

fn jan10(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 10)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

async fn mount_lawyer_with_booking(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/lawyer/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "lawyer": {
                "id": 4,
                "name": "B. Bista",
                "availability_status": "Available",
                "working_hours_start": "09:00",
                "working_hours_end": "17:00"
            }
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lawyer-appointments/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "appointments": [
                {"id": 1, "appointment_date": "2025-01-10T10:00:00", "status": "confirmed"}
            ]
        })))
        .mount(server)
        .await;
}

// ---- Booking pipeline: profile -> planner -> submission ----

#[tokio::test]
async fn booking_pipeline_applies_both_availability_tests() {
    let server = MockServer::start().await;
    mount_lawyer_with_booking(&server).await;

    let api = api_for(&server);
    let lawyer = api.lawyer(LawyerId(4)).await.unwrap();

    let hours = WorkingHours::parse(
        lawyer.working_hours_start.as_deref().unwrap(),
        lawyer.working_hours_end.as_deref().unwrap(),
    )
    .unwrap();
    let mut planner = SlotPlanner::new(Some(hours));
    planner.set_booked(api.booked_times(LawyerId(4)).await.unwrap());

    // 10:15 collides with the 10:00 booking.
    planner.set_candidate(jan10(10, 15));
    assert!(!planner.is_submittable());
    assert!(planner.assessment().unwrap().conflict.is_some());

    // 08:30 is outside working hours.
    planner.set_candidate(jan10(8, 30));
    assert!(!planner.is_submittable());
    assert!(!planner.assessment().unwrap().within_hours);

    // 10:45 passes both tests.
    planner.set_candidate(jan10(10, 45));
    assert!(planner.is_submittable());
}

#[tokio::test]
async fn submission_race_surfaces_as_slot_conflict() {
    let server = MockServer::start().await;
    mount_lawyer_with_booking(&server).await;

    // The other client won the race between the local check and submit.
    Mock::given(method("POST"))
        .and(path("/api/book-appointment"))
        .respond_with(ResponseTemplate::new(409).set_body_json(
            serde_json::json!({"error": "This time slot is already booked. Please choose another time."}),
        ))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut planner = SlotPlanner::new(Some(WorkingHours::parse("09:00", "17:00").unwrap()));
    planner.set_booked(api.booked_times(LawyerId(4)).await.unwrap());
    planner.set_candidate(jan10(10, 45));
    assert!(planner.is_submittable(), "local check passes before the race");

    let err = api
        .book_appointment(LawyerId(4), jan10(10, 45))
        .await
        .unwrap_err();
    assert!(matches!(err, LexlinkError::SlotConflict { .. }));
}

// ---- Chat coordination over an API-backed transcript source ----

fn transcript_body(ids: &[(i64, &str)]) -> serde_json::Value {
    serde_json::json!({
        "messages": ids
            .iter()
            .map(|(id, text)| {
                serde_json::json!({
                    "id": id,
                    "sender": "lawyer",
                    "message": text,
                    "created_at": "2025-01-10T09:00:00"
                })
            })
            .collect::<Vec<_>>()
    })
}

fn live_message(id: i64, case: CaseId, text: &str) -> ChatMessage {
    ChatMessage {
        id: MessageId(id),
        case_id: case,
        sender: Role::Lawyer,
        message: text.to_string(),
        created_at: jan10(9, 30),
    }
}

#[tokio::test]
async fn case_switch_never_leaks_messages_from_the_left_case() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/case/5/messages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(transcript_body(&[(1, "case five history")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/case/9/messages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(transcript_body(&[(2, "case nine history")])),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let transcripts: Arc<dyn TranscriptSource> = Arc::new(api);

    let channel = MockChannel::new();
    let handles = channel.handles();
    let mut coordinator = CaseCoordinator::new(Arc::new(channel), transcripts);

    coordinator.connect().await.unwrap();
    coordinator.open_case(CaseId(5)).await.unwrap();
    assert_eq!(coordinator.transcript()[0].message, "case five history");

    coordinator.open_case(CaseId(9)).await.unwrap();

    // Leave(5) precedes join(9), exactly once each.
    assert_eq!(
        handles.sent_events().await,
        vec![
            ClientEvent::JoinCase { case_id: CaseId(5) },
            ClientEvent::LeaveCase { case_id: CaseId(5) },
            ClientEvent::JoinCase { case_id: CaseId(9) },
        ]
    );

    // A case-5 message arriving moments after the switch is dropped.
    let stale = live_message(7, CaseId(5), "late case five message");
    assert_eq!(
        coordinator.handle_event(ServerEvent::NewMessage(stale)),
        Inbound::Dropped
    );
    assert!(
        coordinator
            .transcript()
            .iter()
            .all(|m| m.case_id == CaseId(9)),
        "no case-5 message may appear after the switch"
    );

    // Teardown leaves case 9 before disconnecting.
    coordinator.shutdown().await.unwrap();
    let sent = handles.sent_events().await;
    assert_eq!(
        sent.last(),
        Some(&ClientEvent::LeaveCase { case_id: CaseId(9) })
    );
}

// ---- Session store gating the authorized client ----

#[tokio::test]
async fn login_stores_the_session_and_authorizes_later_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Login successful",
            "token": "jwt-e2e",
            "client": {"id": 3, "name": "Chandra"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/client-appointments"))
        .and(wiremock::matchers::header("authorization", "Bearer jwt-e2e"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"appointments": []})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open(dir.path()).unwrap();
    assert!(store.credential(Role::Client).is_none());

    let api = api_for(&server);
    let session = api
        .login(
            Role::Client,
            &lexlink_api::Credentials {
                email: "c@example.com".into(),
                password: "pw".into(),
            },
        )
        .await
        .unwrap();

    store
        .login(
            Role::Client,
            SecretString::from(session.token),
            session.profile["id"].as_i64().unwrap(),
            session.profile["name"].as_str().unwrap().to_string(),
        )
        .unwrap();

    let mut authorized = api.clone();
    authorized.set_token(store.credential(Role::Client).unwrap());
    let appointments = authorized.client_appointments().await.unwrap();
    assert!(appointments.is_empty());

    // Logout gates the portal again.
    store.logout(Role::Client).unwrap();
    assert!(store.credential(Role::Client).is_none());
}
