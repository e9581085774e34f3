//! Competitor-mention filter
//!
//! Sentences naming a configured competitor are removed from the answer.

use async_trait::async_trait;
use regex::RegexBuilder;

use super::{split_sentences, CheckOutcome, OutputCheck};
use crate::domain::DomainError;

#[derive(Debug)]
pub struct CompetitorCheck {
    pattern: Option<regex::Regex>,
}

impl CompetitorCheck {
    pub fn new(competitors: &[String]) -> Result<Self, DomainError> {
        let names: Vec<String> = competitors
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(regex::escape)
            .collect();

        if names.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", names.join("|")))
            .case_insensitive(true)
            .build()
            .map_err(|e| DomainError::configuration(format!("Bad competitor list: {e}")))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }
}

#[async_trait]
impl OutputCheck for CompetitorCheck {
    async fn check(&self, text: &str) -> Result<CheckOutcome, DomainError> {
        let Some(ref pattern) = self.pattern else {
            return Ok(CheckOutcome::Pass);
        };

        if !pattern.is_match(text) {
            return Ok(CheckOutcome::Pass);
        }

        let kept: Vec<String> = split_sentences(text)
            .into_iter()
            .filter(|sentence| !pattern.is_match(sentence))
            .collect();

        Ok(CheckOutcome::Filtered(kept.join(" ")))
    }

    fn name(&self) -> &'static str {
        "competitor_check"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(names: &[&str]) -> CompetitorCheck {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        CompetitorCheck::new(&names).unwrap()
    }

    #[tokio::test]
    async fn test_clean_text_passes() {
        let check = check(&["AcmeCorp"]);
        let outcome = check.check("We offer great service.").await.unwrap();
        assert_eq!(outcome, CheckOutcome::Pass);
    }

    #[tokio::test]
    async fn test_mentioning_sentence_is_filtered() {
        let check = check(&["AcmeCorp"]);
        let outcome = check
            .check("We offer great service. AcmeCorp is cheaper though.")
            .await
            .unwrap();

        assert_eq!(
            outcome,
            CheckOutcome::Filtered("We offer great service.".to_string())
        );
    }

    #[tokio::test]
    async fn test_match_is_case_insensitive() {
        let check = check(&["AcmeCorp"]);
        let outcome = check.check("Try acmecorp instead.").await.unwrap();
        assert_eq!(outcome, CheckOutcome::Filtered(String::new()));
    }

    #[tokio::test]
    async fn test_partial_words_do_not_match() {
        let check = check(&["Acme"]);
        let outcome = check.check("Acmeology is a science.").await.unwrap();
        assert_eq!(outcome, CheckOutcome::Pass);
    }

    #[tokio::test]
    async fn test_empty_competitor_list_passes_everything() {
        let check = check(&[]);
        let outcome = check.check("Anything at all.").await.unwrap();
        assert_eq!(outcome, CheckOutcome::Pass);
    }
}
