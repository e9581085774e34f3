//! Per-sentence toxicity filter
//!
//! Scores come from a hosted scoring service behind the `ToxicityScorer`
//! trait. Sentences scoring above the threshold are removed.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use super::{split_sentences, CheckOutcome, OutputCheck};
use crate::domain::DomainError;

/// Trait for hosted toxicity-scoring services
#[async_trait]
pub trait ToxicityScorer: Send + Sync + Debug {
    /// Return one score in [0.0, 1.0] per input sentence
    async fn score(&self, sentences: &[String]) -> Result<Vec<f32>, DomainError>;
}

#[derive(Debug)]
pub struct ToxicityCheck {
    scorer: Arc<dyn ToxicityScorer>,
    threshold: f32,
}

impl ToxicityCheck {
    pub const DEFAULT_THRESHOLD: f32 = 0.7;

    pub fn new(scorer: Arc<dyn ToxicityScorer>, threshold: f32) -> Self {
        Self { scorer, threshold }
    }
}

#[async_trait]
impl OutputCheck for ToxicityCheck {
    async fn check(&self, text: &str) -> Result<CheckOutcome, DomainError> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Ok(CheckOutcome::Pass);
        }

        let scores = self.scorer.score(&sentences).await?;
        if scores.len() != sentences.len() {
            return Err(DomainError::provider(
                "toxicity",
                format!(
                    "Scorer returned {} scores for {} sentences",
                    scores.len(),
                    sentences.len()
                ),
            ));
        }

        if scores.iter().all(|score| *score <= self.threshold) {
            return Ok(CheckOutcome::Pass);
        }

        let kept: Vec<String> = sentences
            .into_iter()
            .zip(scores)
            .filter(|(_, score)| *score <= self.threshold)
            .map(|(sentence, _)| sentence)
            .collect();

        Ok(CheckOutcome::Filtered(kept.join(" ")))
    }

    fn name(&self) -> &'static str {
        "toxic_language"
    }
}
