//! Embedding provider boundary
//!
//! Queries are embedded before hitting the vector index; documents were
//! embedded the same way at ingestion time (outside this service).

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// What the embedding will be used for. Some providers (Cohere) produce
/// different vectors for queries vs. stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingInputType {
    SearchQuery,
    SearchDocument,
}

/// Trait for embedding providers (Cohere, etc.)
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate one embedding vector per input text
    async fn embed(
        &self,
        texts: &[String],
        input_type: EmbeddingInputType,
    ) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    #[derive(Debug)]
    pub struct MockEmbeddingProvider {
        dimensions: usize,
        error: Option<String>,
    }

    impl MockEmbeddingProvider {
        pub fn new(dimensions: usize) -> Self {
            Self {
                dimensions,
                error: None,
            }
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }
    }

    #[async_trait]
    impl EmbeddingProvider for MockEmbeddingProvider {
        async fn embed(
            &self,
            texts: &[String],
            _input_type: EmbeddingInputType,
        ) -> Result<Vec<Vec<f32>>, DomainError> {
            if let Some(ref error) = self.error {
                return Err(DomainError::provider("mock-embedding", error));
            }

            // Deterministic vectors derived from the text bytes
            Ok(texts
                .iter()
                .map(|text| {
                    let hash = text.bytes().fold(0u64, |acc, b| acc.wrapping_add(b as u64));
                    (0..self.dimensions)
                        .map(|i| ((hash.wrapping_add(i as u64) % 1000) as f32 / 1000.0) - 0.5)
                        .collect()
                })
                .collect())
        }

        fn provider_name(&self) -> &'static str {
            "mock-embedding"
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_embeddings_are_deterministic() {
            let provider = MockEmbeddingProvider::new(8);
            let texts = vec!["hello".to_string()];

            let a = provider
                .embed(&texts, EmbeddingInputType::SearchQuery)
                .await
                .unwrap();
            let b = provider
                .embed(&texts, EmbeddingInputType::SearchQuery)
                .await
                .unwrap();

            assert_eq!(a, b);
            assert_eq!(a[0].len(), 8);
        }
    }
}
