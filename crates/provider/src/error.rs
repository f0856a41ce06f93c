use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while talking to storage, signing, or publishing
/// backends.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The requested object or topic does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend rejected or failed the request.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// The backend did not respond within the allowed duration.
    #[error("timeout after {0:?}")]
    Timeout(Duration),

    /// A network or transport-level error occurred.
    #[error("connection error: {0}")]
    Connection(String),

    /// The provider was given invalid configuration or lacks credentials.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The backend rejected the request due to rate limiting.
    #[error("rate limited")]
    RateLimited,
}

impl ProviderError {
    /// Returns `true` if the error is transient and the operation might
    /// succeed if the event were delivered again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Connection(_) | Self::RateLimited
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(ProviderError::Timeout(Duration::from_secs(5)).is_retryable());
        assert!(ProviderError::Connection("reset".into()).is_retryable());
        assert!(ProviderError::RateLimited.is_retryable());
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!ProviderError::NotFound("itslog/surveys/a.txt".into()).is_retryable());
        assert!(!ProviderError::ExecutionFailed("x".into()).is_retryable());
        assert!(!ProviderError::Configuration("x".into()).is_retryable());
    }

    #[test]
    fn error_display() {
        let err = ProviderError::NotFound("itslog/surveys/a.txt".into());
        assert_eq!(err.to_string(), "not found: itslog/surveys/a.txt");

        let err = ProviderError::Timeout(Duration::from_millis(500));
        assert_eq!(err.to_string(), "timeout after 500ms");

        let err = ProviderError::RateLimited;
        assert_eq!(err.to_string(), "rate limited");
    }
}
