use itslog_core::Notification;
use tracing::info;

use crate::error::ProviderError;
use crate::provider::{PublishReceipt, Publisher};

/// A publisher that logs the notification and reports success without any
/// external I/O.
///
/// Used for dry runs of the notifier against a real bucket, when nothing
/// should reach the topic's subscribers.
pub struct LogPublisher {
    name: String,
}

impl LogPublisher {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Publisher for LogPublisher {
    fn name(&self) -> &str {
        &self.name
    }

    #[allow(clippy::unused_async)]
    async fn publish(&self, notification: &Notification) -> Result<PublishReceipt, ProviderError> {
        info!(
            provider = %self.name,
            topic_arn = %notification.topic_arn,
            subject = %notification.subject,
            body = %notification.body,
            "log publisher received notification"
        );
        Ok(PublishReceipt::new(format!("{}-logged", self.name)))
    }
}
