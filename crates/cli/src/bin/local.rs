//! Local harness: run one invocation and print the response.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use zoolanding_cli::local::{load_event, sample_event, LocalRun};
use zoolanding_cli::logging;
use zoolanding_config::{IngestConfig, LogLevel};

#[derive(Debug, Parser)]
#[command(name = "zoolanding-local")]
#[command(about = "Run the zoolanding ingest pipeline once, locally")]
struct Args {
    /// Event JSON file; defaults to a sample click event
    #[arg(long)]
    event: Option<PathBuf>,
    /// Request id; defaults to a random UUID
    #[arg(long)]
    request_id: Option<String>,
    /// Write objects under this directory instead of a dry-run
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Bucket name, overriding RAW_BUCKET_NAME
    #[arg(long)]
    bucket: Option<String>,
    /// debug, info or error, overriding LOG_LEVEL
    #[arg(long)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = IngestConfig::from_env();
    if let Some(bucket) = args.bucket {
        config = config.bucket(bucket);
    }
    if let Some(level) = args.log_level {
        config = config.log_level(level);
    }
    logging::init(config.log_level)?;

    let event = match &args.event {
        Some(path) => load_event(path)?,
        None => sample_event(),
    };
    let run = LocalRun {
        event,
        request_id: args
            .request_id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        out_dir: args.out_dir,
    };

    let response = run.execute(config).await;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
