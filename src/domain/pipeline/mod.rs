//! Retrieval-augmented chat pipeline
//!
//! Composes retriever, session memory, prompt composer and generation
//! client into one `answer(session, question)` operation. The memory
//! append is the only persistent side effect; upstream failures propagate
//! unchanged and there is no retry or caching.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::memory::{ConversationTurn, SessionStore};
use crate::domain::prompt::PromptComposer;
use crate::domain::retrieval::{Retriever, SearchParams};
use crate::domain::DomainError;

/// Tuning knobs for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Chunks fetched per query
    pub top_k: u32,
    /// Generation temperature
    pub temperature: f32,
    /// Budget applied to each external call
    pub upstream_budget: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            temperature: 0.7,
            upstream_budget: Duration::from_secs(30),
        }
    }
}

pub struct ChatPipeline {
    retriever: Arc<dyn Retriever>,
    llm: Arc<dyn LlmProvider>,
    sessions: Arc<SessionStore>,
    composer: PromptComposer,
    config: PipelineConfig,
}

impl ChatPipeline {
    pub fn new(
        retriever: Arc<dyn Retriever>,
        llm: Arc<dyn LlmProvider>,
        sessions: Arc<SessionStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            retriever,
            llm,
            sessions,
            composer: PromptComposer::new(),
            config,
        }
    }

    /// Answer a question within a session: retrieve context, compose the
    /// prompt with the session's history, generate, record the turn and
    /// return the raw answer.
    pub async fn answer(&self, session_id: &str, question: &str) -> Result<String, DomainError> {
        let params = SearchParams::new(question).with_top_k(self.config.top_k);
        let chunks = self
            .bounded("retrieval", self.retriever.similarity_search(params))
            .await?;
        debug!(session_id, chunks = chunks.len(), "retrieved context");

        let history = self.sessions.recent(session_id).await;
        let prompt = self.composer.compose(&chunks, question, &history);

        let request = LlmRequest::builder()
            .user(prompt)
            .temperature(self.config.temperature)
            .build();
        let response = self
            .bounded("generation", self.llm.generate(request))
            .await?;
        let answer = response.content().to_string();

        self.sessions
            .append(session_id, ConversationTurn::new(question, answer.clone()))
            .await;

        Ok(answer)
    }

    async fn bounded<T>(
        &self,
        operation: &str,
        future: impl std::future::Future<Output = Result<T, DomainError>>,
    ) -> Result<T, DomainError> {
        timeout(self.config.upstream_budget, future)
            .await
            .map_err(|_| DomainError::timeout(operation, self.config.upstream_budget.as_secs()))?
    }
}

impl std::fmt::Debug for ChatPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatPipeline")
            .field("retriever", &self.retriever.provider_name())
            .field("llm", &self.llm.provider_name())
            .field("config", &self.config)
            .finish()
    }
}
