//! Application state shared by the HTTP handlers

use std::sync::Arc;

use crate::domain::guardrails::FallbackPolicy;
use crate::domain::pipeline::ChatPipeline;
use crate::domain::retrieval::Retriever;
use crate::domain::Guard;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ChatPipeline>,
    pub guard: Arc<Guard>,
    pub fallback_policy: FallbackPolicy,
    /// Kept for the readiness probe
    pub retriever: Arc<dyn Retriever>,
}

impl AppState {
    pub fn new(
        pipeline: Arc<ChatPipeline>,
        guard: Arc<Guard>,
        fallback_policy: FallbackPolicy,
        retriever: Arc<dyn Retriever>,
    ) -> Self {
        Self {
            pipeline,
            guard,
            fallback_policy,
            retriever,
        }
    }
}
