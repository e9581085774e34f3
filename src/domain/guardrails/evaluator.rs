//! Response quality evaluator
//!
//! Asks the generative model to assess the answer against a configured list
//! of quality questions. Purely informational: findings are logged, the
//! text is never altered and there is no pass/fail gate.

use async_trait::async_trait;
use std::sync::Arc;

use tracing::debug;

use super::{CheckOutcome, OutputCheck};
use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::DomainError;

#[derive(Debug)]
pub struct ResponseEvaluator {
    llm: Arc<dyn LlmProvider>,
    questions: Vec<String>,
}

impl ResponseEvaluator {
    pub fn new(llm: Arc<dyn LlmProvider>, questions: Vec<String>) -> Self {
        Self { llm, questions }
    }

    fn evaluation_prompt(&self, text: &str) -> String {
        let questions = self
            .questions
            .iter()
            .map(|q| format!("- {q}"))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Evaluate the following chatbot response against each question. \
Answer briefly per question.\n\nQuestions:\n{questions}\n\nResponse:\n{text}"
        )
    }
}

#[async_trait]
impl OutputCheck for ResponseEvaluator {
    async fn check(&self, text: &str) -> Result<CheckOutcome, DomainError> {
        if self.questions.is_empty() {
            return Ok(CheckOutcome::Pass);
        }

        let request = LlmRequest::builder()
            .user(self.evaluation_prompt(text))
            .temperature(0.0)
            .build();

        let assessment = self.llm.generate(request).await?;
        debug!(
            check = self.name(),
            assessment = %assessment.content(),
            "response quality assessment"
        );

        Ok(CheckOutcome::Pass)
    }

    fn name(&self) -> &'static str {
        "response_evaluator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::provider::mock::MockLlmProvider;

    fn questions() -> Vec<String> {
        vec!["Is the response engaging and conversational?".to_string()]
    }

    #[tokio::test]
    async fn test_evaluator_never_filters() {
        let llm = Arc::new(MockLlmProvider::new("mock").with_response("Looks good."));
        let evaluator = ResponseEvaluator::new(llm, questions());

        let outcome = evaluator.check("Hi! Happy to help.").await.unwrap();
        assert_eq!(outcome, CheckOutcome::Pass);
    }

    #[tokio::test]
    async fn test_evaluator_error_propagates() {
        let llm = Arc::new(MockLlmProvider::new("mock").with_error("model unavailable"));
        let evaluator = ResponseEvaluator::new(llm, questions());

        assert!(evaluator.check("Hi!").await.is_err());
    }

    #[tokio::test]
    async fn test_no_questions_skips_the_model_call() {
        let llm = Arc::new(MockLlmProvider::new("mock"));
        let evaluator = ResponseEvaluator::new(llm.clone(), Vec::new());

        let outcome = evaluator.check("Hi!").await.unwrap();
        assert_eq!(outcome, CheckOutcome::Pass);
        assert_eq!(llm.call_count(), 0);
    }
}
