//! Lambda entry point
//!
//! Configuration is read and the S3 client built once, before the runtime
//! starts polling for invocations.

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use zoolanding_cli::{handler, logging};
use zoolanding_config::IngestConfig;
use zoolanding_pipeline::IngestPipeline;
use zoolanding_storage::S3Store;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = IngestConfig::from_env();
    logging::init(config.log_level)?;

    tracing::info!(
        target: "zoolanding::startup",
        bucket = %config.bucket,
        dry_run = config.dry_run,
        log_level = %config.log_level,
        "Starting ingest function"
    );

    let store = S3Store::from_env().await;
    let pipeline = IngestPipeline::new(config, store);
    let pipeline = &pipeline;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler::handle(pipeline, event).await
    }))
    .await
}
