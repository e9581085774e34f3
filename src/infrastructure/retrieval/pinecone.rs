//! Pinecone retriever
//!
//! Embeds the query via the configured embedding provider, then queries a
//! Pinecone index over its data-plane API. Chunk text is read from the
//! `text` metadata key, matching how the documents were ingested.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::super::http_client::HttpClientTrait;
use crate::domain::embedding::{EmbeddingInputType, EmbeddingProvider};
use crate::domain::retrieval::{RetrievedChunk, Retriever, SearchParams};
use crate::domain::DomainError;

const TEXT_METADATA_KEY: &str = "text";

#[derive(Debug)]
pub struct PineconeRetriever<C: HttpClientTrait> {
    client: C,
    embeddings: Arc<dyn EmbeddingProvider>,
    api_key: String,
    index_host: String,
}

impl<C: HttpClientTrait> PineconeRetriever<C> {
    pub fn new(
        client: C,
        embeddings: Arc<dyn EmbeddingProvider>,
        api_key: impl Into<String>,
        index_host: impl Into<String>,
    ) -> Self {
        Self {
            client,
            embeddings,
            api_key: api_key.into(),
            index_host: index_host.into().trim_end_matches('/').to_string(),
        }
    }

    fn query_url(&self) -> String {
        format!("{}/query", self.index_host)
    }

    fn stats_url(&self) -> String {
        format!("{}/describe_index_stats", self.index_host)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Api-Key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }
}

#[async_trait]
impl<C: HttpClientTrait> Retriever for PineconeRetriever<C> {
    async fn similarity_search(
        &self,
        params: SearchParams,
    ) -> Result<Vec<RetrievedChunk>, DomainError> {
        let vectors = self
            .embeddings
            .embed(
                std::slice::from_ref(&params.query),
                EmbeddingInputType::SearchQuery,
            )
            .await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("pinecone", "Query embedding missing"))?;

        let body = serde_json::json!({
            "vector": vector,
            "topK": params.top_k,
            "includeMetadata": true,
        });

        let json = self
            .client
            .post_json(&self.query_url(), self.headers(), &body)
            .await?;

        let response: PineconeQueryResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("pinecone", format!("Failed to parse response: {}", e))
        })?;

        Ok(response
            .matches
            .into_iter()
            .map(|m| {
                let text = m
                    .metadata
                    .as_ref()
                    .and_then(|meta| meta.get(TEXT_METADATA_KEY))
                    .and_then(|value| value.as_str())
                    .unwrap_or_default()
                    .to_string();

                RetrievedChunk::new(m.id, text, m.score.unwrap_or(0.0))
            })
            .collect())
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        self.client
            .post_json(&self.stats_url(), self.headers(), &serde_json::json!({}))
            .await?;
        Ok(true)
    }

    fn provider_name(&self) -> &'static str {
        "pinecone"
    }
}

// Pinecone API types

#[derive(Debug, Deserialize)]
struct PineconeQueryResponse {
    #[serde(default)]
    matches: Vec<PineconeMatch>,
}

#[derive(Debug, Deserialize)]
struct PineconeMatch {
    id: String,
    score: Option<f32>,
    metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::mock::MockEmbeddingProvider;
    use crate::infrastructure::http_client::mock::MockHttpClient;

    const HOST: &str = "https://nova-index.svc.pinecone.io";

    fn retriever(client: MockHttpClient) -> PineconeRetriever<MockHttpClient> {
        PineconeRetriever::new(
            client,
            Arc::new(MockEmbeddingProvider::new(4)),
            "test-key",
            HOST,
        )
    }

    #[tokio::test]
    async fn test_similarity_search_reads_text_metadata() {
        let mock_response = serde_json::json!({
            "matches": [
                {
                    "id": "chunk-1",
                    "score": 0.92,
                    "metadata": { "text": "We open at 9am on weekdays." }
                },
                {
                    "id": "chunk-2",
                    "score": 0.81,
                    "metadata": { "text": "Weekend hours are 10am to 4pm." }
                }
            ]
        });

        let client = MockHttpClient::new().with_response(format!("{HOST}/query"), mock_response);
        let retriever = retriever(client);

        let chunks = retriever
            .similarity_search(SearchParams::new("opening hours").with_top_k(5))
            .await
            .unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].id, "chunk-1");
        assert_eq!(chunks[0].text, "We open at 9am on weekdays.");
        assert_eq!(chunks[0].score, 0.92);
    }

    #[tokio::test]
    async fn test_missing_text_metadata_yields_empty_chunk() {
        let mock_response = serde_json::json!({
            "matches": [{ "id": "chunk-1", "score": 0.5 }]
        });

        let client = MockHttpClient::new().with_response(format!("{HOST}/query"), mock_response);
        let retriever = retriever(client);

        let chunks = retriever
            .similarity_search(SearchParams::new("anything"))
            .await
            .unwrap();

        assert_eq!(chunks[0].text, "");
    }

    #[tokio::test]
    async fn test_index_error_propagates() {
        let client =
            MockHttpClient::new().with_error(format!("{HOST}/query"), "index unreachable");
        let retriever = retriever(client);

        let result = retriever.similarity_search(SearchParams::new("q")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_health_check_uses_index_stats() {
        let client = MockHttpClient::new().with_response(
            format!("{HOST}/describe_index_stats"),
            serde_json::json!({ "totalVectorCount": 1200 }),
        );
        let retriever = retriever(client);

        assert!(retriever.health_check().await.unwrap());
    }
}
