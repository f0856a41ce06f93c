use std::fmt;
use std::time::Duration;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Validity window for archive download links: 7 days.
pub const SIGNED_URL_VALID_SECONDS: u64 = SECONDS_PER_DAY * 7;

/// A presigned retrieval URL together with the window it was signed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    url: String,
    expires_in: Duration,
}

impl SignedUrl {
    pub fn new(url: impl Into<String>, expires_in: Duration) -> Self {
        Self {
            url: url.into(),
            expires_in,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    pub fn valid_seconds(&self) -> u64 {
        self.expires_in.as_secs()
    }

    /// Validity window in whole days, rounded half up.
    pub fn valid_days(&self) -> u64 {
        (self.valid_seconds() + SECONDS_PER_DAY / 2) / SECONDS_PER_DAY
    }
}

impl fmt::Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
