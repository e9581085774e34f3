//! Nova chat service
//!
//! A retrieval-augmented chat backend: user messages are answered by
//! retrieving context from a vector index, prompting a hosted generative
//! model, and filtering the answer through an output guardrail chain.
//! Exposed over one HTTP endpoint and one interactive console loop.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::guardrails::{CompetitorCheck, ResponseEvaluator, ToxicityCheck};
use domain::llm::LlmProvider;
use domain::memory::SessionStore;
use domain::pipeline::{ChatPipeline, PipelineConfig};
use domain::retrieval::Retriever;
use domain::{DomainError, EmbeddingProvider, Guard};
use infrastructure::embedding::CohereEmbeddingProvider;
use infrastructure::guardrails::HttpToxicityScorer;
use infrastructure::llm::GeminiProvider;
use infrastructure::retrieval::PineconeRetriever;
use infrastructure::HttpClient;
use tracing::info;

/// Create the application state with all clients initialized.
/// Fails fast on missing credentials so a misconfigured instance never
/// serves requests that are guaranteed to error.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let http = HttpClient::new();

    let cohere_key = require(&config.cohere.api_key, "cohere.api_key / NOVA__COHERE__API_KEY")?;
    let embeddings: Arc<dyn EmbeddingProvider> = Arc::new(CohereEmbeddingProvider::new(
        http.clone(),
        cohere_key,
        config.cohere.model.clone(),
    ));

    let pinecone_key = require(
        &config.pinecone.api_key,
        "pinecone.api_key / NOVA__PINECONE__API_KEY",
    )?;
    let index_host = require(
        &config.pinecone.index_host,
        "pinecone.index_host / NOVA__PINECONE__INDEX_HOST",
    )?;
    let retriever: Arc<dyn Retriever> = Arc::new(PineconeRetriever::new(
        http.clone(),
        embeddings,
        pinecone_key,
        index_host,
    ));

    let gemini_key = require(&config.gemini.api_key, "gemini.api_key / NOVA__GEMINI__API_KEY")?;
    let llm: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::new(
        http.clone(),
        gemini_key,
        config.gemini.model.clone(),
    ));

    let sessions = Arc::new(SessionStore::new(
        config.memory.window,
        Duration::from_secs(config.memory.idle_ttl_secs),
    ));

    let pipeline = Arc::new(ChatPipeline::new(
        retriever.clone(),
        llm.clone(),
        sessions,
        PipelineConfig {
            top_k: config.retrieval.top_k,
            temperature: config.gemini.temperature,
            upstream_budget: Duration::from_secs(config.timeouts.upstream_secs),
        },
    ));

    let guard = Arc::new(create_guard(config, http, llm)?);

    info!(
        model = %config.gemini.model,
        top_k = config.retrieval.top_k,
        "Successfully initialized all components"
    );

    Ok(AppState::new(
        pipeline,
        guard,
        config.guardrails.fallback_policy,
        retriever,
    ))
}

/// Build the output guard chain: quality evaluation, competitor filtering,
/// toxicity filtering - in that order. Checks share the upstream budget so a
/// hung scorer or evaluator cannot stall a request.
fn create_guard(
    config: &AppConfig,
    http: HttpClient,
    llm: Arc<dyn LlmProvider>,
) -> Result<Guard, DomainError> {
    let mut guard =
        Guard::new().with_budget(Duration::from_secs(config.timeouts.upstream_secs));

    if !config.guardrails.evaluation_questions.is_empty() {
        guard = guard.with_check(ResponseEvaluator::new(
            llm,
            config.guardrails.evaluation_questions.clone(),
        ));
    }

    guard = guard.with_check(CompetitorCheck::new(&config.guardrails.competitors)?);

    if let Some(ref endpoint) = config.guardrails.toxicity_endpoint {
        guard = guard.with_check(ToxicityCheck::new(
            Arc::new(HttpToxicityScorer::new(http, endpoint.clone())),
            config.guardrails.toxicity_threshold,
        ));
    }

    Ok(guard)
}

fn require<'a>(value: &'a Option<String>, name: &str) -> anyhow::Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("Missing required configuration: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_fails_without_credentials() {
        let config = AppConfig::default();
        let result = create_app_state(&config);

        let message = result
            .err()
            .expect("missing credentials should fail")
            .to_string();
        assert!(message.contains("cohere.api_key"));
    }

    #[test]
    fn test_create_app_state_with_credentials() {
        let mut config = AppConfig::default();
        config.cohere.api_key = Some("cohere-key".to_string());
        config.pinecone.api_key = Some("pinecone-key".to_string());
        config.pinecone.index_host = Some("https://idx.svc.pinecone.io".to_string());
        config.gemini.api_key = Some("gemini-key".to_string());

        assert!(create_app_state(&config).is_ok());
    }
}
