//! The guard chain
//!
//! Runs checks in order, feeding each one the previous check's output.
//! Checks that call external services run under the configured budget;
//! a blown budget surfaces as a timeout, not a hang. If filtering leaves
//! nothing usable the chain raises; the caller decides what happens then
//! via its `FallbackPolicy`.

use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use super::{CheckOutcome, OutputCheck};
use crate::domain::DomainError;

#[derive(Debug, Default)]
pub struct Guard {
    checks: Vec<Box<dyn OutputCheck>>,
    budget: Option<Duration>,
}

impl Guard {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            budget: None,
        }
    }

    pub fn with_check(mut self, check: impl OutputCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Bound each check's run time; unset means unbounded
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Validate generated text. Returns the (possibly filtered) text, or an
    /// error when a check fails, blows the budget, or filtering removed all
    /// content.
    pub async fn validate(&self, text: &str) -> Result<String, DomainError> {
        let mut current = text.to_string();

        for check in &self.checks {
            let outcome = match self.budget {
                Some(budget) => timeout(budget, check.check(&current))
                    .await
                    .map_err(|_| DomainError::timeout(check.name(), budget.as_secs()))??,
                None => check.check(&current).await?,
            };

            match outcome {
                CheckOutcome::Pass => {}
                CheckOutcome::Filtered(filtered) => {
                    debug!(check = check.name(), "check filtered content");
                    current = filtered;
                }
            }
        }

        if current.trim().is_empty() {
            return Err(DomainError::validation(
                "validator chain removed all content",
            ));
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct StaticCheck {
        name: &'static str,
        outcome: Result<CheckOutcome, &'static str>,
    }

    #[async_trait]
    impl OutputCheck for StaticCheck {
        async fn check(&self, _text: &str) -> Result<CheckOutcome, DomainError> {
            match &self.outcome {
                Ok(outcome) => Ok(outcome.clone()),
                Err(message) => Err(DomainError::provider("test", *message)),
            }
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    #[tokio::test]
    async fn test_empty_guard_passes_text_through() {
        let guard = Guard::new();
        let result = guard.validate("hello there").await.unwrap();
        assert_eq!(result, "hello there");
    }

    #[tokio::test]
    async fn test_filtered_text_flows_to_next_check() {
        // Second check sees the first check's output, not the original
        #[derive(Debug)]
        struct Recorder;

        #[async_trait]
        impl OutputCheck for Recorder {
            async fn check(&self, text: &str) -> Result<CheckOutcome, DomainError> {
                assert_eq!(text, "filtered");
                Ok(CheckOutcome::Pass)
            }

            fn name(&self) -> &'static str {
                "recorder"
            }
        }

        let guard = Guard::new()
            .with_check(StaticCheck {
                name: "first",
                outcome: Ok(CheckOutcome::Filtered("filtered".to_string())),
            })
            .with_check(Recorder);

        let result = guard.validate("original").await.unwrap();
        assert_eq!(result, "filtered");
    }

    #[tokio::test]
    async fn test_check_error_propagates() {
        let guard = Guard::new().with_check(StaticCheck {
            name: "boom",
            outcome: Err("service unavailable"),
        });

        assert!(guard.validate("text").await.is_err());
    }

    #[derive(Debug)]
    struct SlowCheck {
        delay: Duration,
    }

    #[async_trait]
    impl OutputCheck for SlowCheck {
        async fn check(&self, _text: &str) -> Result<CheckOutcome, DomainError> {
            tokio::time::sleep(self.delay).await;
            Ok(CheckOutcome::Pass)
        }

        fn name(&self) -> &'static str {
            "slow_check"
        }
    }

    #[tokio::test]
    async fn test_check_exceeding_the_budget_is_a_timeout() {
        let guard = Guard::new()
            .with_budget(Duration::from_millis(10))
            .with_check(SlowCheck {
                delay: Duration::from_millis(200),
            });

        let error = guard.validate("text").await.unwrap_err();
        assert!(matches!(error, DomainError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_checks_within_the_budget_still_pass() {
        let guard = Guard::new()
            .with_budget(Duration::from_secs(5))
            .with_check(SlowCheck {
                delay: Duration::from_millis(1),
            });

        let result = guard.validate("hello there").await.unwrap();
        assert_eq!(result, "hello there");
    }

    #[tokio::test]
    async fn test_everything_filtered_is_an_error() {
        let guard = Guard::new().with_check(StaticCheck {
            name: "scrub",
            outcome: Ok(CheckOutcome::Filtered("  ".to_string())),
        });

        let error = guard.validate("bad content").await.unwrap_err();
        assert!(matches!(error, DomainError::Validation { .. }));
    }
}
