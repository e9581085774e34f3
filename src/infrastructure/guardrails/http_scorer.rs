//! Hosted toxicity scoring service client

use async_trait::async_trait;
use serde::Deserialize;

use super::super::http_client::HttpClientTrait;
use crate::domain::guardrails::ToxicityScorer;
use crate::domain::DomainError;

/// Scores sentences via a hosted moderation endpoint.
/// Expects `{"sentences": [...]}` in, `{"scores": [...]}` out.
#[derive(Debug)]
pub struct HttpToxicityScorer<C: HttpClientTrait> {
    client: C,
    endpoint: String,
}

impl<C: HttpClientTrait> HttpToxicityScorer<C> {
    pub fn new(client: C, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> ToxicityScorer for HttpToxicityScorer<C> {
    async fn score(&self, sentences: &[String]) -> Result<Vec<f32>, DomainError> {
        let body = serde_json::json!({ "sentences": sentences });
        let headers = vec![("Content-Type", "application/json")];

        let json = self.client.post_json(&self.endpoint, headers, &body).await?;

        let response: ScoreResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("toxicity", format!("Failed to parse response: {}", e))
        })?;

        Ok(response.scores)
    }
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    scores: Vec<f32>,
}
