use tracing::debug;

use crate::config::AwsBaseConfig;

/// Build an AWS SDK configuration from the given [`AwsBaseConfig`].
///
/// Credentials come from the standard environment chain (the Lambda
/// execution role when hosted). `AWS_ENDPOINT_URL` is honored by the same
/// chain.
pub async fn build_sdk_config(config: &AwsBaseConfig) -> aws_config::SdkConfig {
    debug!(region = %config.region, "loading AWS SDK configuration");
    aws_config::from_env()
        .region(aws_config::Region::new(config.region.clone()))
        .load()
        .await
}
