//! AWS providers for the ITS-LOG survey notifier.
//!
//! - **S3** ([`S3Provider`]): reads survey uploads and presigns archive
//!   downloads. Implements both `SurveyStore` and `UrlSigner`.
//! - **SNS** ([`SnsProvider`]): publishes the composed notification.
//!
//! Both are built from an [`AwsBaseConfig`](config::AwsBaseConfig), which
//! picks the region; credentials come from the environment chain.

pub mod auth;
pub mod config;
pub mod error;
pub mod s3;
pub mod sns;

// Re-exports for convenience.
pub use config::AwsBaseConfig;
pub use error::AwsProviderError;
pub use s3::S3Provider;
pub use sns::SnsProvider;
