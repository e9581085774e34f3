//! Output guardrails
//!
//! An ordered chain of content-policy checks applied to generated text
//! before it reaches the user: quality evaluation (informational),
//! competitor-mention filtering and per-sentence toxicity filtering.

pub mod competitor;
pub mod evaluator;
pub mod guard;
pub mod toxicity;

pub use competitor::CompetitorCheck;
pub use evaluator::ResponseEvaluator;
pub use guard::Guard;
pub use toxicity::{ToxicityCheck, ToxicityScorer};

use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Outcome of a single check in the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Text passes unchanged
    Pass,
    /// Text was rewritten with violating content removed
    Filtered(String),
}

/// One content-policy check. Checks run in order; each receives the output
/// of the previous one.
#[async_trait]
pub trait OutputCheck: Send + Sync + Debug {
    async fn check(&self, text: &str) -> Result<CheckOutcome, DomainError>;

    fn name(&self) -> &'static str;
}

/// Fixed refusal shown instead of unvalidated content under `FailClosed`
pub const REFUSAL: &str =
    "I'm sorry, I can't share that response. Is there anything else I can help with?";

/// What the caller does when the validator chain itself errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Return the raw, unfiltered answer (matches the historical behavior)
    #[default]
    FailOpen,
    /// Return a generic refusal instead of unvalidated content
    FailClosed,
}

/// Split text into sentences on `.`, `!` and `?` boundaries.
/// Used by the per-sentence filtering checks.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}
