//! Domain layer - pipeline, memory, prompt and guardrail logic

pub mod embedding;
pub mod error;
pub mod guardrails;
pub mod llm;
pub mod memory;
pub mod pipeline;
pub mod prompt;
pub mod retrieval;

pub use error::DomainError;
pub use guardrails::{
    CheckOutcome, CompetitorCheck, FallbackPolicy, Guard, OutputCheck, ResponseEvaluator,
    ToxicityCheck, ToxicityScorer,
};
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole,
    Usage,
};
pub use memory::{ConversationMemory, ConversationTurn, SessionStore};
pub use pipeline::{ChatPipeline, PipelineConfig};
pub use prompt::PromptComposer;
pub use retrieval::{RetrievedChunk, Retriever, SearchParams};
pub use embedding::{EmbeddingInputType, EmbeddingProvider};
