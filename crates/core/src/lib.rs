//! Core types for the ITS-LOG survey notifier.
//!
//! Everything here is pure: parsing the S3 creation event, deriving the
//! sysdiagnose archive key from a survey key, and composing the plain-text
//! notification. No I/O happens in this crate.

pub mod archive;
pub mod event;
pub mod message;
pub mod signed_url;
pub mod survey;

pub use archive::ArchiveReference;
pub use event::{S3Bucket, S3Entity, S3Event, S3EventRecord, S3Object, TriggerEvent};
pub use message::{NOTIFICATION_SUBJECT, Notification, SNS_TOPIC_ARN, compose_message};
pub use signed_url::{SECONDS_PER_DAY, SIGNED_URL_VALID_SECONDS, SignedUrl};
pub use survey::SurveyContent;
