use std::time::Duration;

use itslog_core::{Notification, SignedUrl};

use crate::error::ProviderError;

/// Read access to the bucket survey uploads land in.
///
/// These traits use native `async fn` and are therefore not object-safe.
/// The notifier is generic over them, so no boxing is needed.
pub trait SurveyStore: Send + Sync {
    /// Returns the name of this store, used in log fields.
    fn name(&self) -> &str;

    /// Fetch the full body of `key` in `bucket`.
    fn get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, ProviderError>> + Send;
}

/// Issues time-limited retrieval URLs for private objects.
pub trait UrlSigner: Send + Sync {
    fn name(&self) -> &str;

    /// Sign a GET for `key` in `bucket`, valid for `expires_in`.
    ///
    /// Signing is computed from credentials the signer already holds; the
    /// object is not looked up.
    fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> impl std::future::Future<Output = Result<SignedUrl, ProviderError>> + Send;
}

/// What a publisher hands back after accepting a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Identifier assigned by the messaging service.
    pub message_id: String,
}

impl PublishReceipt {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }
}

/// Delivers a composed notification to its topic.
pub trait Publisher: Send + Sync {
    fn name(&self) -> &str;

    fn publish(
        &self,
        notification: &Notification,
    ) -> impl std::future::Future<Output = Result<PublishReceipt, ProviderError>> + Send;
}
