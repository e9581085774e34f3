use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Timeout: {operation} exceeded {budget_secs}s")]
    Timeout {
        operation: String,
        budget_secs: u64,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn timeout(operation: impl Into<String>, budget_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            budget_secs,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True when the error came from an upstream service (provider or timeout)
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Provider { .. } | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
        assert!(!error.is_upstream());
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("gemini", "connection refused");
        assert_eq!(
            error.to_string(),
            "Provider error: gemini - connection refused"
        );
        assert!(error.is_upstream());
    }

    #[test]
    fn test_timeout_error() {
        let error = DomainError::timeout("generation", 30);
        assert_eq!(error.to_string(), "Timeout: generation exceeded 30s");
        assert!(error.is_upstream());
    }
}
