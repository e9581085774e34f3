//! Generation client boundary - messages, requests and the provider trait

pub mod message;
pub mod provider;
pub mod request;
pub mod response;

pub use message::{Message, MessageRole};
pub use provider::LlmProvider;
pub use request::{LlmRequest, LlmRequestBuilder};
pub use response::{FinishReason, LlmResponse, Usage};
