//! Embedding provider implementations

pub mod cohere;

pub use cohere::{CohereEmbeddingProvider, DEFAULT_COHERE_MODEL};
