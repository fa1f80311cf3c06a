use std::sync::Arc;

use crate::{config::Config, service::s3::S3};

#[derive(Clone)]
pub struct Context {
    pub s3_client: Arc<S3>,
    pub config: Config,
}
