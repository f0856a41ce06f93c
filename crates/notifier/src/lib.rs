//! Survey notifier: turns an S3 survey upload into an SNS notification that
//! carries the survey text and a presigned link to the matching sysdiagnose
//! archive.

pub mod config;
pub mod error;
pub mod handler;
pub mod notifier;
pub mod telemetry;

pub use config::NotifierConfig;
pub use error::NotifierError;
pub use handler::function_handler;
pub use notifier::Notifier;
