use std::time::Duration;

use itslog_core::{NOTIFICATION_SUBJECT, SIGNED_URL_VALID_SECONDS, SNS_TOPIC_ARN};

/// Destination and link settings for outgoing notifications, fixed to the
/// compiled-in topic, subject, and 7-day link window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// SNS topic ARN notifications are published to.
    pub topic_arn: String,

    pub subject: String,

    /// How long the archive download link stays valid, in seconds.
    pub url_expiry_seconds: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            topic_arn: SNS_TOPIC_ARN.to_owned(),
            subject: NOTIFICATION_SUBJECT.to_owned(),
            url_expiry_seconds: SIGNED_URL_VALID_SECONDS,
        }
    }
}

impl NotifierConfig {
    pub fn url_expiry(&self) -> Duration {
        Duration::from_secs(self.url_expiry_seconds)
    }
}
