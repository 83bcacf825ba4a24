// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Public lawyer directory: search, profiles, reviews.

use serde::Deserialize;
use serde_json::Value;

use lexlink_core::{LawyerId, LexlinkError};

use crate::client::ApiClient;
use crate::types::{LawyerFilters, LawyerRecord, NewReview, Review};

#[derive(Debug, Deserialize)]
struct LawyersEnvelope {
    lawyers: Vec<LawyerRecord>,
}

#[derive(Debug, Deserialize)]
struct LawyerEnvelope {
    lawyer: LawyerRecord,
}

#[derive(Debug, Deserialize)]
struct ReviewsEnvelope {
    #[serde(default)]
    reviews: Vec<Review>,
}

impl ApiClient {
    /// Searches the public directory. Only KYC-verified lawyers appear.
    pub async fn lawyers(&self, filters: &LawyerFilters) -> Result<Vec<LawyerRecord>, LexlinkError> {
        let envelope: LawyersEnvelope = self
            .get_json_with_query("/api/lawyers", &filters.to_query())
            .await?;
        Ok(envelope.lawyers)
    }

    /// Fetches a single lawyer profile.
    pub async fn lawyer(&self, id: LawyerId) -> Result<LawyerRecord, LexlinkError> {
        let envelope: LawyerEnvelope = self.get_json(&format!("/api/lawyer/{}", id.0)).await?;
        Ok(envelope.lawyer)
    }

    /// Fetches the reviews on a lawyer's profile.
    pub async fn lawyer_reviews(&self, id: LawyerId) -> Result<Vec<Review>, LexlinkError> {
        let envelope: ReviewsEnvelope = self
            .get_json(&format!("/api/lawyer/{}/reviews", id.0))
            .await?;
        Ok(envelope.reviews)
    }

    /// Submits a review. Ratings run 1–5; out-of-range values are
    /// rejected before any network call.
    pub async fn submit_review(&self, review: &NewReview) -> Result<Value, LexlinkError> {
        if !(1..=5).contains(&review.rating) {
            return Err(LexlinkError::Validation(
                "rating must be between 1 and 5".into(),
            ));
        }
        self.post_json("/api/submit-review", review).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn search_passes_filters_as_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/lawyers"))
            .and(query_param("specialization", "family"))
            .and(query_param("location", "Kathmandu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "lawyers": [{
                    "id": 4,
                    "name": "B. Bista",
                    "specialization": "family",
                    "working_hours_start": "09:00",
                    "working_hours_end": "17:00"
                }]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let lawyers = client
            .lawyers(&LawyerFilters {
                specialization: Some("family".into()),
                location: Some("Kathmandu".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(lawyers.len(), 1);
        assert_eq!(lawyers[0].id, LawyerId(4));
        assert_eq!(lawyers[0].working_hours_start.as_deref(), Some("09:00"));
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected_locally() {
        let client = test_client("http://127.0.0.1:9");
        let err = client
            .submit_review(&NewReview {
                lawyer_id: LawyerId(1),
                rating: 6,
                comment: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, LexlinkError::Validation(_)));
    }
}
