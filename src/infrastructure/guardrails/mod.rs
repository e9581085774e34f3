//! Guardrail service clients

pub mod http_scorer;

pub use http_scorer::HttpToxicityScorer;
