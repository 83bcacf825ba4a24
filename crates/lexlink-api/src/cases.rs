// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Case endpoints: CRUD, sub-resources, and the chat transcript.
//!
//! Binary document/evidence payloads stay out of this client (file
//! storage belongs to the backend); the metadata operations the
//! dashboards use are covered.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use lexlink_core::traits::TranscriptSource;
use lexlink_core::{CaseId, ChatMessage, LexlinkError};

use crate::client::ApiClient;
use crate::types::{CaseSummary, MessageRow, NewCase, NewEvidence, NewTimelineEvent};

#[derive(Debug, Deserialize)]
struct CasesEnvelope {
    #[serde(default)]
    cases: Vec<CaseSummary>,
}

#[derive(Debug, Deserialize)]
struct MessagesEnvelope {
    #[serde(default)]
    messages: Vec<MessageRow>,
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: MessageRow,
}

impl ApiClient {
    /// Creates a case linking the authenticated lawyer to a client.
    pub async fn create_case(&self, body: &NewCase) -> Result<Value, LexlinkError> {
        if body.title.trim().is_empty() {
            return Err(LexlinkError::Validation("case title is required".into()));
        }
        self.post_json("/api/create-case", body).await
    }

    /// Fetches a case with its timeline, documents, and evidence.
    pub async fn case(&self, id: CaseId) -> Result<Value, LexlinkError> {
        self.get_json(&format!("/api/case/{}", id.0)).await
    }

    /// Fetches a case through the client-portal view.
    pub async fn client_case(&self, id: CaseId) -> Result<Value, LexlinkError> {
        self.get_json(&format!("/api/client-case/{}", id.0)).await
    }

    /// Updates case fields.
    pub async fn update_case(&self, id: CaseId, body: &Value) -> Result<Value, LexlinkError> {
        self.put_json(&format!("/api/case/{}", id.0), body).await
    }

    /// Lists the authenticated lawyer's cases.
    pub async fn lawyer_cases(&self) -> Result<Vec<CaseSummary>, LexlinkError> {
        let envelope: CasesEnvelope = self.get_json("/api/lawyer-cases").await?;
        Ok(envelope.cases)
    }

    /// Lists the authenticated client's cases.
    pub async fn client_cases(&self) -> Result<Vec<CaseSummary>, LexlinkError> {
        let envelope: CasesEnvelope = self.get_json("/api/client-cases").await?;
        Ok(envelope.cases)
    }

    /// Lists the cases a lawyer shares with one client.
    pub async fn lawyer_client_cases(
        &self,
        client_id: lexlink_core::ClientId,
    ) -> Result<Vec<CaseSummary>, LexlinkError> {
        let envelope: CasesEnvelope = self
            .get_json(&format!("/api/lawyer-client-cases/{}", client_id.0))
            .await?;
        Ok(envelope.cases)
    }

    /// Moves a case to a new status (lawyer portal).
    pub async fn update_case_status(
        &self,
        id: CaseId,
        status: &str,
    ) -> Result<Value, LexlinkError> {
        self.put_json(
            &format!("/api/lawyer-case/{}/update-status", id.0),
            &serde_json::json!({"status": status}),
        )
        .await
    }

    /// Appends a timeline event to a case.
    pub async fn add_timeline_event(
        &self,
        id: CaseId,
        event: &NewTimelineEvent,
    ) -> Result<Value, LexlinkError> {
        self.post_json(&format!("/api/case/{}/timeline", id.0), event)
            .await
    }

    /// Removes a document from a case.
    pub async fn delete_document(
        &self,
        id: CaseId,
        document_id: i64,
    ) -> Result<Value, LexlinkError> {
        self.delete_json(&format!("/api/case/{}/documents/{document_id}", id.0))
            .await
    }

    /// Records evidence metadata on a case.
    pub async fn add_evidence(&self, id: CaseId, body: &NewEvidence) -> Result<Value, LexlinkError> {
        self.post_json(&format!("/api/case/{}/evidence", id.0), body)
            .await
    }

    /// Marks an evidence item as reviewed by the lawyer.
    pub async fn mark_evidence_reviewed(
        &self,
        id: CaseId,
        evidence_id: i64,
    ) -> Result<Value, LexlinkError> {
        self.put_json(
            &format!("/api/case/{}/evidence/{evidence_id}/review", id.0),
            &serde_json::json!({}),
        )
        .await
    }

    /// Replaces the lawyer's private notes on a case.
    pub async fn update_private_notes(
        &self,
        id: CaseId,
        notes: &str,
    ) -> Result<Value, LexlinkError> {
        self.put_json(
            &format!("/api/case/{}/notes", id.0),
            &serde_json::json!({"private_notes": notes}),
        )
        .await
    }

    /// Fetches the full chat transcript for a case.
    pub async fn case_messages(&self, id: CaseId) -> Result<Vec<ChatMessage>, LexlinkError> {
        let envelope: MessagesEnvelope =
            self.get_json(&format!("/api/case/{}/messages", id.0)).await?;
        Ok(envelope
            .messages
            .into_iter()
            .map(|row| row.into_message(id))
            .collect())
    }

    /// Sends a chat message on a case over the request/response API.
    ///
    /// The realtime channel only delivers the counterparty's messages;
    /// the returned row is what the sender appends locally.
    pub async fn send_case_message(
        &self,
        id: CaseId,
        text: &str,
    ) -> Result<ChatMessage, LexlinkError> {
        if text.trim().is_empty() {
            return Err(LexlinkError::Validation(
                "message content is required".into(),
            ));
        }
        let envelope: MessageEnvelope = self
            .post_json(
                &format!("/api/case/{}/messages", id.0),
                &serde_json::json!({"message": text}),
            )
            .await?;
        Ok(envelope.message.into_message(id))
    }
}

#[async_trait]
impl TranscriptSource for ApiClient {
    async fn messages(&self, case: CaseId) -> Result<Vec<ChatMessage>, LexlinkError> {
        self.case_messages(case).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use lexlink_core::{MessageId, Role};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn transcript_rows_get_the_case_id_reattached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/case/5/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "messages": [
                    {"id": 1, "sender": "client", "message": "hello", "created_at": "2025-01-10T09:00:00"},
                    {"id": 2, "sender": "lawyer", "message": "hi", "created_at": "2025-01-10T09:01:00"}
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let messages = client.case_messages(CaseId(5)).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.case_id == CaseId(5)));
        assert_eq!(messages[1].sender, Role::Lawyer);
    }

    #[tokio::test]
    async fn sending_returns_the_stored_row() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/case/5/messages"))
            .and(body_json(serde_json::json!({"message": "see you at 10"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "message": {"id": 9, "sender": "client", "message": "see you at 10",
                            "created_at": "2025-01-10T09:05:00"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let message = client
            .send_case_message(CaseId(5), "see you at 10")
            .await
            .unwrap();
        assert_eq!(message.id, MessageId(9));
        assert_eq!(message.case_id, CaseId(5));
    }

    #[tokio::test]
    async fn empty_message_is_rejected_locally() {
        let client = test_client("http://127.0.0.1:9");
        let err = client
            .send_case_message(CaseId(5), "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, LexlinkError::Validation(_)));
    }
}
