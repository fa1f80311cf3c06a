use aws_sdk_s3 as s3;
use lambda_runtime::tracing::{self, instrument};
use s3::{error::ProvideErrorMetadata, operation::copy_object::CopyObjectOutput};

use super::CopyError;
use crate::model::{CopiedObject, CopyRequest};

#[instrument(skip(client))]
pub(in crate::service::s3) async fn copy_object(
    client: &s3::Client,
    request: &CopyRequest,
) -> Result<CopiedObject, CopyError> {
    let resp = client
        .copy_object()
        .bucket(&request.destination_bucket)
        .copy_source(&request.copy_source)
        .key(&request.destination_key)
        .send()
        .await;

    match resp {
        Ok(output) => Ok(CopiedObject::from(output)),
        Err(e) => {
            if let Some(service_err) = e.as_service_error() {
                return Err(CopyError::Provider {
                    code: service_err.code().map(str::to_string),
                    message: service_err.message().map(str::to_string),
                });
            }

            Err(CopyError::Transport(
                anyhow::Error::new(e).context("failed to perform copy object operation"),
            ))
        }
    }
}

impl From<CopyObjectOutput> for CopiedObject {
    fn from(output: CopyObjectOutput) -> Self {
        let result = output.copy_object_result();
        CopiedObject {
            e_tag: result.and_then(|r| r.e_tag()).map(str::to_string),
            last_modified: result.and_then(|r| r.last_modified()).map(|t| t.secs()),
            version_id: output.version_id().map(str::to_string),
            copy_source_version_id: output.copy_source_version_id().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use s3::{primitives::DateTime, types::CopyObjectResult};

    use super::*;

    #[test]
    fn copied_object_from_output() {
        let output = CopyObjectOutput::builder()
            .copy_object_result(
                CopyObjectResult::builder()
                    .e_tag("\"9b2cf535f27731c974343645a3985328\"")
                    .last_modified(DateTime::from_secs(1_710_177_663))
                    .build(),
            )
            .version_id("3HL4kqtJlcpXroDTDmJ+rmSpXd3dIbrHY")
            .build();

        assert_eq!(
            CopiedObject::from(output),
            CopiedObject {
                e_tag: Some("\"9b2cf535f27731c974343645a3985328\"".to_string()),
                last_modified: Some(1_710_177_663),
                version_id: Some("3HL4kqtJlcpXroDTDmJ+rmSpXd3dIbrHY".to_string()),
                copy_source_version_id: None,
            }
        );
    }

    #[test]
    fn copied_object_from_empty_output() {
        let output = CopyObjectOutput::builder().build();
        assert_eq!(CopiedObject::from(output), CopiedObject::default());
    }
}
