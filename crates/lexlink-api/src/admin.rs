// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin portal endpoints: resource listings, deletion, templates.
//!
//! Deletions pair with `lexlink_core::optimistic::apply` in the caller:
//! the row disappears from the local view immediately and reappears if
//! the backend call fails.

use serde::Deserialize;
use serde_json::Value;

use lexlink_core::{Appointment, CaseId, ClientId, LawyerId, LexlinkError};

use crate::client::ApiClient;
use crate::types::{CaseSummary, DocumentTemplate, LawyerRecord};

#[derive(Debug, Deserialize)]
struct LawyersEnvelope {
    #[serde(default)]
    lawyers: Vec<LawyerRecord>,
}

#[derive(Debug, Deserialize)]
struct ClientsEnvelope {
    #[serde(default)]
    clients: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct CasesEnvelope {
    #[serde(default)]
    cases: Vec<CaseSummary>,
}

#[derive(Debug, Deserialize)]
struct AppointmentsEnvelope {
    #[serde(default)]
    appointments: Vec<Appointment>,
}

#[derive(Debug, Deserialize)]
struct TemplatesEnvelope {
    #[serde(default)]
    templates: Vec<DocumentTemplate>,
}

impl ApiClient {
    /// Lists every lawyer account, verified or not.
    pub async fn admin_lawyers(&self) -> Result<Vec<LawyerRecord>, LexlinkError> {
        let envelope: LawyersEnvelope = self.get_json("/api/admin/lawyers").await?;
        Ok(envelope.lawyers)
    }

    /// Lists every client account.
    pub async fn admin_clients(&self) -> Result<Vec<Value>, LexlinkError> {
        let envelope: ClientsEnvelope = self.get_json("/api/admin/clients").await?;
        Ok(envelope.clients)
    }

    /// Lists every case.
    pub async fn admin_cases(&self) -> Result<Vec<CaseSummary>, LexlinkError> {
        let envelope: CasesEnvelope = self.get_json("/api/admin/cases").await?;
        Ok(envelope.cases)
    }

    /// Lists every appointment.
    pub async fn admin_appointments(&self) -> Result<Vec<Appointment>, LexlinkError> {
        let envelope: AppointmentsEnvelope = self.get_json("/api/admin/appointments").await?;
        Ok(envelope.appointments)
    }

    pub async fn admin_delete_lawyer(&self, id: LawyerId) -> Result<Value, LexlinkError> {
        self.delete_json(&format!("/api/admin/lawyers/{}", id.0)).await
    }

    pub async fn admin_delete_client(&self, id: ClientId) -> Result<Value, LexlinkError> {
        self.delete_json(&format!("/api/admin/clients/{}", id.0)).await
    }

    pub async fn admin_delete_case(&self, id: CaseId) -> Result<Value, LexlinkError> {
        self.delete_json(&format!("/api/admin/cases/{}", id.0)).await
    }

    pub async fn admin_delete_appointment(&self, id: i64) -> Result<Value, LexlinkError> {
        self.delete_json(&format!("/api/admin/appointments/{id}")).await
    }

    /// Lists the downloadable document templates.
    pub async fn document_templates(&self) -> Result<Vec<DocumentTemplate>, LexlinkError> {
        let envelope: TemplatesEnvelope = self.get_json("/api/document-templates").await?;
        Ok(envelope.templates)
    }

    /// Removes a document template (admin portal).
    pub async fn admin_delete_template(&self, filename: &str) -> Result<Value, LexlinkError> {
        self.delete_json(&format!("/api/admin/delete-template/{filename}"))
            .await
    }
}
