/// Errors that fail an invocation of the lambda
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CopyOnUploadError {
    #[error("event contained no records")]
    EmptyEvent,
    #[error("event record is missing {0}")]
    MissingField(&'static str),
    #[error("unable to decode object key {key}")]
    KeyDecode { key: String },
    /// The underlying failure is logged, not carried
    #[error(
        "Error getting object {key} from bucket {bucket}. Make sure they exist and your bucket is in the same region as this function."
    )]
    CopyFailed { key: String, bucket: String },
}
