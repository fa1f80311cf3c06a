use aws_lambda_events::event::s3::S3Event;

use crate::{config::Config, error::CopyOnUploadError, key::decode_object_key};

/// The bucket and decoded key of the first record of an S3 event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectCreatedNotification {
    pub bucket: String,
    pub key: String,
}

impl TryFrom<&S3Event> for ObjectCreatedNotification {
    type Error = CopyOnUploadError;

    fn try_from(event: &S3Event) -> Result<Self, Self::Error> {
        let record = event.records.first().ok_or(CopyOnUploadError::EmptyEvent)?;

        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(CopyOnUploadError::MissingField("s3.bucket.name"))?;
        let raw_key = record
            .s3
            .object
            .key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(CopyOnUploadError::MissingField("s3.object.key"))?;

        Ok(Self {
            bucket: bucket.to_string(),
            key: decode_object_key(raw_key)?,
        })
    }
}

/// The parameters of a single copy object call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub destination_bucket: String,
    /// `/{source_bucket}/{key}`
    pub copy_source: String,
    pub destination_key: String,
}

impl CopyRequest {
    pub fn new(config: &Config, key: &str) -> Self {
        Self {
            destination_bucket: config.destination_bucket.clone(),
            copy_source: format!("/{}/{}", config.source_bucket, key),
            destination_key: key.to_string(),
        }
    }
}

/// What S3 reported back for a successful copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopiedObject {
    pub e_tag: Option<String>,
    /// Seconds since the unix epoch
    pub last_modified: Option<i64>,
    pub version_id: Option<String>,
    pub copy_source_version_id: Option<String>,
}
