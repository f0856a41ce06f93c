use itslog_core::S3Event;
use itslog_provider::{Publisher, SurveyStore, UrlSigner};
use lambda_runtime::{Error, LambdaEvent};
use tracing::debug;

use crate::notifier::Notifier;

/// Lambda entry point. Returns no payload on success.
pub async fn function_handler<S, U, P>(
    notifier: &Notifier<S, U, P>,
    event: LambdaEvent<S3Event>,
) -> Result<(), Error>
where
    S: SurveyStore,
    U: UrlSigner,
    P: Publisher,
{
    let (payload, context) = event.into_parts();
    debug!(request_id = %context.request_id, "received S3 event");
    notifier.handle(&payload).await?;
    Ok(())
}
