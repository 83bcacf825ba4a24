// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! KYC verification: lawyer submission and the admin review queue.
//!
//! Approval and rejection are pushed to the affected lawyer over the
//! realtime channel as a `kyc_status_updated` event.

use serde::Deserialize;
use serde_json::Value;

use lexlink_core::{KycStatus, LexlinkError};

use crate::client::ApiClient;
use crate::types::{KycRecord, KycSubmission};

#[derive(Debug, Deserialize)]
struct KycEnvelope {
    #[serde(default)]
    kyc_verifications: Vec<KycRecord>,
}

impl ApiClient {
    /// Submits the authenticated lawyer's KYC details for review.
    /// All fields are required before any network call is made.
    pub async fn submit_kyc(&self, submission: &KycSubmission) -> Result<Value, LexlinkError> {
        if submission.full_name.trim().is_empty()
            || submission.id_number.trim().is_empty()
            || submission.address.trim().is_empty()
        {
            return Err(LexlinkError::Validation("all KYC fields are required".into()));
        }
        self.post_json("/api/lawyer-kyc", submission).await
    }

    /// Lists pending and decided KYC submissions (admin portal).
    pub async fn kyc_verifications(&self) -> Result<Vec<KycRecord>, LexlinkError> {
        let envelope: KycEnvelope = self.get_json("/api/admin/kyc-verifications").await?;
        Ok(envelope.kyc_verifications)
    }

    /// Approves or rejects a submission (admin portal). Only those two
    /// decisions are accepted here.
    pub async fn update_kyc_status(
        &self,
        kyc_id: i64,
        decision: KycStatus,
    ) -> Result<Value, LexlinkError> {
        if !matches!(decision, KycStatus::Approved | KycStatus::Rejected) {
            return Err(LexlinkError::Validation(
                "KYC decision must be approved or rejected".into(),
            ));
        }
        self.put_json(
            &format!("/api/admin/kyc-verifications/{kyc_id}/update-status"),
            &serde_json::json!({"status": decision}),
        )
        .await
    }
}
