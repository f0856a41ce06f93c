use itslog_core::{
    ArchiveReference, Notification, S3Event, SurveyContent, TriggerEvent, compose_message,
};
use itslog_provider::{Publisher, SurveyStore, UrlSigner};
use tracing::{debug, error, info, instrument, warn};

use crate::config::NotifierConfig;
use crate::error::NotifierError;

/// Relays one survey upload to the notification topic.
///
/// Steps run strictly in order: read the survey, derive the archive key,
/// sign a download link for it, compose the message, publish. A failed read
/// or signing aborts the invocation; a failed publish is only logged.
#[derive(Debug)]
pub struct Notifier<S, U, P> {
    store: S,
    signer: U,
    publisher: P,
    config: NotifierConfig,
}

impl<S, U, P> Notifier<S, U, P>
where
    S: SurveyStore,
    U: UrlSigner,
    P: Publisher,
{
    /// Create a notifier with the compiled-in destination and link window.
    pub fn new(store: S, signer: U, publisher: P) -> Self {
        Self {
            store,
            signer,
            publisher,
            config: NotifierConfig::default(),
        }
    }

    /// Handle a delivered S3 event. Only the first record is processed.
    #[instrument(skip_all, fields(records = event.records.len()))]
    pub async fn handle(&self, event: &S3Event) -> Result<(), NotifierError> {
        let Some(trigger) = event.first_trigger() else {
            error!("S3 event contains no records");
            return Err(NotifierError::EmptyEvent);
        };

        if event.records.len() > 1 {
            warn!(
                ignored = event.records.len() - 1,
                "only the first record of the event is processed"
            );
        }

        self.notify(&trigger).await
    }

    /// Run the relay for one creation record.
    #[instrument(
        skip_all,
        fields(
            bucket = %trigger.bucket,
            key = %trigger.key,
            event_name = %trigger.event_name,
            event_time = %trigger.event_time,
        )
    )]
    pub async fn notify(&self, trigger: &TriggerEvent) -> Result<(), NotifierError> {
        let object_key = trigger.decoded_key();

        debug!(store = self.store.name(), object_key = %object_key, "fetching survey object");
        let body = match self.store.get_object(&trigger.bucket, &object_key).await {
            Ok(body) => body,
            Err(e) => {
                error!(
                    error = %e,
                    retryable = e.is_retryable(),
                    object_key = %object_key,
                    "failed to fetch survey object"
                );
                return Err(NotifierError::Fetch(e));
            }
        };
        let survey = SurveyContent::from_bytes(&body);
        info!(raw_text = %survey.as_str(), "survey object read");

        let archive = ArchiveReference::from_survey_key(&object_key);
        debug!(signer = self.signer.name(), archive_key = %archive, "signing archive URL");
        let signed_url = self
            .signer
            .presign_get(&trigger.bucket, archive.key(), self.config.url_expiry())
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    retryable = e.is_retryable(),
                    archive_key = %archive,
                    "failed to sign archive URL"
                );
                NotifierError::Sign(e)
            })?;

        let message = compose_message(&survey, &signed_url, trigger);
        let notification = Notification::new(&self.config.topic_arn, &self.config.subject, message);

        debug!(
            publisher = self.publisher.name(),
            topic_arn = %notification.topic_arn,
            "publishing notification"
        );
        match self.publisher.publish(&notification).await {
            Ok(receipt) => info!(
                src_key = %trigger.key,
                archive_key = %archive,
                signed_url = %signed_url,
                message = %notification.body,
                event = ?trigger,
                message_id = %receipt.message_id,
                "push sent"
            ),
            // The invocation still succeeds when publishing fails.
            Err(e) => error!(
                error = %e,
                retryable = e.is_retryable(),
                topic_arn = %notification.topic_arn,
                "failed to publish survey notification"
            ),
        }

        Ok(())
    }
}
