pub mod error;
pub mod log;
pub mod provider;

pub use error::ProviderError;
pub use log::LogPublisher;
pub use provider::{PublishReceipt, Publisher, SurveyStore, UrlSigner};
