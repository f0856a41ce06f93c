use aws_sdk_sns::error::DisplayErrorContext;
use itslog_core::Notification;
use itslog_provider::{ProviderError, PublishReceipt, Publisher};
use tracing::{debug, error, info, instrument};

use crate::auth::build_sdk_config;
use crate::config::AwsBaseConfig;
use crate::error::classify_sdk_error;

/// AWS SNS provider for publishing survey notifications.
#[derive(Clone)]
pub struct SnsProvider {
    client: aws_sdk_sns::Client,
}

impl std::fmt::Debug for SnsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnsProvider")
            .field("client", &"<SnsClient>")
            .finish()
    }
}

impl SnsProvider {
    /// Create a new `SnsProvider` by building an AWS SDK client.
    pub async fn new(config: &AwsBaseConfig) -> Self {
        let sdk_config = build_sdk_config(config).await;
        Self {
            client: aws_sdk_sns::Client::new(&sdk_config),
        }
    }

    /// Create an `SnsProvider` with a pre-built client (for testing).
    pub fn with_client(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

impl Publisher for SnsProvider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "aws-sns"
    }

    #[instrument(
        skip(self, notification),
        fields(provider = "aws-sns", topic_arn = %notification.topic_arn)
    )]
    async fn publish(&self, notification: &Notification) -> Result<PublishReceipt, ProviderError> {
        debug!(subject = %notification.subject, "publishing to SNS topic");

        let result = self
            .client
            .publish()
            .topic_arn(&notification.topic_arn)
            .subject(&notification.subject)
            .message(&notification.body)
            .send()
            .await
            .map_err(|e| {
                let err_str = DisplayErrorContext(&e).to_string();
                error!(error = %err_str, "SNS publish failed");
                let aws_err: ProviderError = classify_sdk_error(&err_str).into();
                aws_err
            })?;

        let message_id = result.message_id().unwrap_or("unknown").to_owned();
        info!(message_id = %message_id, "SNS message published");

        Ok(PublishReceipt::new(message_id))
    }
}
