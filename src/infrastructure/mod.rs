//! Infrastructure layer - clients for the hosted services and logging setup

pub mod embedding;
pub mod guardrails;
pub mod http_client;
pub mod llm;
pub mod logging;
pub mod retrieval;

pub use http_client::{HttpClient, HttpClientTrait};
