//! Cohere embedding provider

use async_trait::async_trait;
use serde::Deserialize;

use super::super::http_client::HttpClientTrait;
use crate::domain::embedding::{EmbeddingInputType, EmbeddingProvider};
use crate::domain::DomainError;

const DEFAULT_COHERE_BASE_URL: &str = "https://api.cohere.ai";
pub const DEFAULT_COHERE_MODEL: &str = "embed-english-v3.0";

/// Cohere embed API provider
#[derive(Debug)]
pub struct CohereEmbeddingProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    model: String,
    base_url: String,
}

impl<C: HttpClientTrait> CohereEmbeddingProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, model, DEFAULT_COHERE_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            auth_header: format!("Bearer {}", api_key.into()),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn embed_url(&self) -> String {
        format!("{}/v1/embed", self.base_url)
    }
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for CohereEmbeddingProvider<C> {
    async fn embed(
        &self,
        texts: &[String],
        input_type: EmbeddingInputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        let input_type = match input_type {
            EmbeddingInputType::SearchQuery => "search_query",
            EmbeddingInputType::SearchDocument => "search_document",
        };

        let body = serde_json::json!({
            "texts": texts,
            "model": self.model,
            "input_type": input_type,
        });
        let headers = vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        let json = self
            .client
            .post_json(&self.embed_url(), headers, &body)
            .await?;

        let response: CohereEmbedResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("cohere", format!("Failed to parse response: {}", e))
        })?;

        if response.embeddings.len() != texts.len() {
            return Err(DomainError::provider(
                "cohere",
                format!(
                    "Expected {} embeddings, got {}",
                    texts.len(),
                    response.embeddings.len()
                ),
            ));
        }

        Ok(response.embeddings)
    }

    fn provider_name(&self) -> &'static str {
        "cohere"
    }
}

#[derive(Debug, Deserialize)]
struct CohereEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}
