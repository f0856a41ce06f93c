use std::time::Duration;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use itslog_core::SignedUrl;
use itslog_provider::{ProviderError, SurveyStore, UrlSigner};
use tracing::{debug, error, info, instrument};

use crate::auth::build_sdk_config;
use crate::config::AwsBaseConfig;
use crate::error::classify_sdk_error;

/// Longest window S3 accepts for a SigV4 presigned URL.
pub const MAX_PRESIGN_EXPIRY: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// S3 access for the notifier: reads survey uploads and presigns archive
/// downloads.
#[derive(Clone)]
pub struct S3Provider {
    client: aws_sdk_s3::Client,
}

impl std::fmt::Debug for S3Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Provider")
            .field("client", &"<S3Client>")
            .finish()
    }
}

impl S3Provider {
    /// Create a new `S3Provider` by building an AWS SDK client.
    pub async fn new(config: &AwsBaseConfig) -> Self {
        let sdk_config = build_sdk_config(config).await;
        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
        }
    }

    /// Create an `S3Provider` with a pre-built client (for testing).
    pub fn with_client(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

impl SurveyStore for S3Provider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "aws-s3"
    }

    #[instrument(skip(self), fields(provider = "aws-s3"))]
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ProviderError> {
        debug!("downloading object from S3");

        let result = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err_str = DisplayErrorContext(&e).to_string();
                error!(error = %err_str, "S3 get_object failed");
                let aws_err: ProviderError = classify_sdk_error(&err_str).into();
                aws_err
            })?;

        let body = result
            .body
            .collect()
            .await
            .map_err(|e| ProviderError::ExecutionFailed(format!("failed to read S3 body: {e}")))?
            .into_bytes();

        info!(size = body.len(), "S3 object downloaded");
        Ok(body.to_vec())
    }
}

impl UrlSigner for S3Provider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "aws-s3"
    }

    #[instrument(skip(self), fields(provider = "aws-s3"))]
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<SignedUrl, ProviderError> {
        if expires_in > MAX_PRESIGN_EXPIRY {
            return Err(ProviderError::Configuration(format!(
                "presigned URL expiry {}s exceeds the S3 maximum of {}s",
                expires_in.as_secs(),
                MAX_PRESIGN_EXPIRY.as_secs()
            )));
        }

        let presigning = PresigningConfig::expires_in(expires_in).map_err(|e| {
            ProviderError::Configuration(format!("invalid presigning config: {e}"))
        })?;

        let request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                let err_str = DisplayErrorContext(&e).to_string();
                error!(error = %err_str, "S3 presign failed");
                let aws_err: ProviderError = classify_sdk_error(&err_str).into();
                aws_err
            })?;

        debug!(expires_in_secs = expires_in.as_secs(), "S3 GET presigned");
        Ok(SignedUrl::new(request.uri().to_string(), expires_in))
    }
}
