/// Region used when the environment does not name one. Matches the region of
/// the notification topic.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Shared base configuration for the S3 and SNS providers.
///
/// Only the region is chosen here. Credentials and any endpoint override
/// (`AWS_ENDPOINT_URL`, e.g. for `LocalStack`) come from the SDK's own
/// environment chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsBaseConfig {
    /// AWS region (e.g. `"us-west-2"`).
    pub region: String,
}

impl AwsBaseConfig {
    /// Create a new `AwsBaseConfig` with the given region.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }

    /// Take the region from `AWS_REGION`, as set by the Lambda runtime,
    /// falling back to [`DEFAULT_REGION`].
    pub fn from_env() -> Self {
        Self::from_region_var(std::env::var("AWS_REGION").ok())
    }

    fn from_region_var(region: Option<String>) -> Self {
        let region = region
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());
        Self::new(region)
    }
}

impl Default for AwsBaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_sets_region() {
        let config = AwsBaseConfig::new("eu-west-1");
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    fn default_uses_topic_region() {
        assert_eq!(AwsBaseConfig::default().region, "us-west-2");
    }

    #[test]
    fn region_var_wins_when_set() {
        let config = AwsBaseConfig::from_region_var(Some("ap-south-1".into()));
        assert_eq!(config.region, "ap-south-1");
    }

    #[test]
    fn blank_region_var_falls_back() {
        assert_eq!(AwsBaseConfig::from_region_var(None).region, DEFAULT_REGION);
        assert_eq!(
            AwsBaseConfig::from_region_var(Some("  ".into())).region,
            DEFAULT_REGION
        );
    }
}
