mod copy;

use aws_sdk_s3 as s3;
use lambda_runtime::tracing;
#[cfg(test)]
use mockall::automock;

use crate::model::{CopiedObject, CopyRequest};

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

/// Why a copy object call did not succeed
#[derive(thiserror::Error, Debug)]
pub enum CopyError {
    /// S3 received the request and rejected it
    #[error("s3 rejected the copy: {code:?} {message:?}")]
    Provider {
        code: Option<String>,
        message: Option<String>,
    },
    /// The request never produced a response from S3
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Copies the object described by the request
    #[tracing::instrument(skip(self))]
    pub async fn copy_object(&self, request: &CopyRequest) -> Result<CopiedObject, CopyError> {
        copy::copy_object(&self.inner, request).await
    }
}
