use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::{
    config::ProviderErrorPolicy,
    context::Context,
    error::CopyOnUploadError,
    model::{CopyRequest, ObjectCreatedNotification},
    service::s3::CopyError,
};

/// Copies the object named by the s3 event into the destination bucket under the same key
#[tracing::instrument(skip(ctx, event), fields(request_id = %event.context.request_id))]
pub async fn handler(ctx: &Context, event: LambdaEvent<S3Event>) -> Result<(), Error> {
    let record_count = event.payload.records.len();
    if record_count > 1 {
        tracing::warn!(record_count, "only the first record of the event is processed");
    }

    let notification = ObjectCreatedNotification::try_from(&event.payload)
        .inspect_err(|e| tracing::error!(error=?e, "invalid s3 event"))?;
    let ObjectCreatedNotification { bucket, key } = notification;

    if bucket != ctx.config.source_bucket {
        tracing::warn!(
            event_bucket = %bucket,
            source_bucket = %ctx.config.source_bucket,
            "event bucket does not match the configured source bucket"
        );
    }

    let request = CopyRequest::new(&ctx.config, &key);
    tracing::trace!(request=?request, "copying object");

    match ctx.s3_client.copy_object(&request).await {
        Ok(copied) => {
            tracing::info!(copied=?copied, "copied object");
            Ok(())
        }
        Err(CopyError::Provider { code, message })
            if ctx.config.provider_error_policy == ProviderErrorPolicy::Log =>
        {
            tracing::error!(?code, ?message, %bucket, %key, "s3 rejected the copy");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error=?e, %bucket, %key, "could not copy object");
            let err = CopyOnUploadError::CopyFailed { key, bucket };
            tracing::error!("{err}");
            Err(err.into())
        }
    }
}
