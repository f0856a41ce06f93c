use crate::event::TriggerEvent;
use crate::signed_url::SignedUrl;
use crate::survey::SurveyContent;

/// Topic every survey notification is published to.
pub const SNS_TOPIC_ARN: &str = "arn:aws:sns:us-west-2:123456789012:sns-topic-name";

pub const NOTIFICATION_SUBJECT: &str = "ITS-LOG: Survey Recorded";

/// Fixed opening of every notification body.
pub const BANNER: &str = "ITS-LOG: A user calls for aid!  \r\n\
                          Survey responses below: \r\n\
                          ---------------------------- \r\n\r\n";

/// A message ready to hand to a publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Destination topic ARN.
    pub topic_arn: String,

    pub subject: String,

    /// Plain-text body built by [`compose_message`].
    pub body: String,
}

impl Notification {
    pub fn new(
        topic_arn: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Build the notification body.
///
/// Layout, CRLF line endings throughout: banner, raw survey text, the expiry
/// sentence with the link's day count, the signed URL, then the source bucket
/// and the event's (still URL-encoded) object key.
pub fn compose_message(survey: &SurveyContent, url: &SignedUrl, event: &TriggerEvent) -> String {
    format!(
        "{BANNER}{survey}\r\n\r\n\
         DOWNLOAD SYSDIAGNOSE FILE NOW.  Link expires {days} day(s) after time sent: \r\n\r\n\
         {url}\r\n\r\n\
         S3 Bucket : {bucket}\r\n\
         File (key): {key}\r\n",
        survey = survey.as_str(),
        days = url.valid_days(),
        url = url.url(),
        bucket = event.bucket,
        key = event.key,
    )
}
