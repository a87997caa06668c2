//! Entry points for zoolanding raw ingest
//!
//! - `zoolanding-lambda`: the Lambda function, writing to S3
//! - `zoolanding-local`: one-shot local harness, dry-run unless given an
//!   output directory

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod handler;
pub mod local;
pub mod logging;
