use std::time::Duration;

use itslog_provider::ProviderError;
use thiserror::Error;

/// Timeout reported when the SDK error does not carry one.
const DEFAULT_SDK_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors specific to AWS provider operations.
#[derive(Debug, Error)]
pub enum AwsProviderError {
    /// The bucket, object, or topic does not exist.
    #[error("AWS resource not found: {0}")]
    NotFound(String),

    /// The AWS SDK returned an error from the service.
    #[error("AWS service error: {0}")]
    ServiceError(String),

    #[error("AWS request throttled")]
    Throttled,

    /// A network or connection error occurred communicating with AWS.
    #[error("AWS connection error: {0}")]
    Connection(String),

    #[error("AWS request timed out")]
    Timeout,

    /// AWS credential resolution failed.
    #[error("credential error: {0}")]
    CredentialError(String),
}

impl From<AwsProviderError> for ProviderError {
    fn from(err: AwsProviderError) -> Self {
        match err {
            AwsProviderError::NotFound(msg) => ProviderError::NotFound(msg),
            AwsProviderError::ServiceError(msg) => ProviderError::ExecutionFailed(msg),
            AwsProviderError::Throttled => ProviderError::RateLimited,
            AwsProviderError::Connection(msg) => ProviderError::Connection(msg),
            AwsProviderError::Timeout => ProviderError::Timeout(DEFAULT_SDK_TIMEOUT),
            AwsProviderError::CredentialError(msg) => ProviderError::Configuration(msg),
        }
    }
}

/// Classify an AWS SDK error string into the appropriate [`AwsProviderError`].
///
/// Expects the full error chain (see `DisplayErrorContext`), since the
/// top-level SDK message alone is usually just "service error".
pub fn classify_sdk_error(error_str: &str) -> AwsProviderError {
    let lower = error_str.to_lowercase();
    if lower.contains("throttl") || lower.contains("rate exceed") || lower.contains("slowdown") {
        AwsProviderError::Throttled
    } else if lower.contains("timeout") || lower.contains("timed out") {
        AwsProviderError::Timeout
    } else if lower.contains("credential") {
        AwsProviderError::CredentialError(error_str.to_owned())
    } else if lower.contains("nosuchkey")
        || lower.contains("nosuchbucket")
        || lower.contains("notfound")
    {
        AwsProviderError::NotFound(error_str.to_owned())
    } else if lower.contains("connection")
        || lower.contains("connect")
        || lower.contains("dns")
        || lower.contains("network")
    {
        AwsProviderError::Connection(error_str.to_owned())
    } else {
        AwsProviderError::ServiceError(error_str.to_owned())
    }
}
