//! Vector retriever boundary - similarity search over stored text chunks

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// A text chunk returned by similarity search, ranked by score.
/// Owned transiently by one pipeline invocation; never persisted here.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedChunk {
    pub id: String,
    pub text: String,
    pub score: f32,
}

impl RetrievedChunk {
    pub fn new(id: impl Into<String>, text: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            score,
        }
    }
}

/// Search parameters for the vector index
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    pub top_k: u32,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: 5,
        }
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }
}

/// Trait for vector index retrievers (Pinecone, etc.)
#[async_trait]
pub trait Retriever: Send + Sync + Debug {
    /// Return the top-k most similar stored chunks for the query
    async fn similarity_search(
        &self,
        params: SearchParams,
    ) -> Result<Vec<RetrievedChunk>, DomainError>;

    /// Check that the backing index is reachable
    async fn health_check(&self) -> Result<bool, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
