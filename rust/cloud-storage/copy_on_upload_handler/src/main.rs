use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use aws_lambda_events::event::s3::S3Event;
use lambda_entrypoint::Entrypoint;
use lambda_runtime::{
    Error, LambdaEvent, run, service_fn,
    tracing::{self},
};

use crate::{config::Config, context::Context, service::s3::S3};

mod config;
mod context;
mod error;
mod handler;
mod key;
mod model;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env()?;
    tracing::trace!(config=?config, "initialized config");

    let region = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    let mut s3_config = aws_sdk_s3::config::Builder::from(&aws_config).force_path_style(true);
    if let Some(endpoint) = &config.endpoint {
        s3_config = s3_config.endpoint_url(endpoint);
    }

    let s3_client = S3::new(aws_sdk_s3::Client::from_conf(s3_config.build()));
    tracing::trace!("initialized s3 client");

    let ctx = Context {
        s3_client: Arc::new(s3_client),
        config,
    };

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();
        async move { handler::handler(&ctx, event).await }
    });

    run(func).await
}
