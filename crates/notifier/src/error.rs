use itslog_provider::ProviderError;
use thiserror::Error;

/// Reasons an invocation fails.
///
/// A failed publish is deliberately absent: it is logged and the invocation
/// still succeeds.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// The event carried no records.
    #[error("event contains no records")]
    EmptyEvent,

    /// The survey object could not be read.
    #[error("failed to fetch survey object: {0}")]
    Fetch(#[source] ProviderError),

    /// No download link could be signed for the archive.
    #[error("failed to sign archive URL: {0}")]
    Sign(#[source] ProviderError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            NotifierError::EmptyEvent.to_string(),
            "event contains no records"
        );
        assert_eq!(
            NotifierError::Fetch(ProviderError::NotFound("b/k".into())).to_string(),
            "failed to fetch survey object: not found: b/k"
        );
    }

    #[test]
    fn source_is_provider_error() {
        let err = NotifierError::Sign(ProviderError::Configuration("no credentials".into()));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "invalid configuration: no credentials");
    }
}
