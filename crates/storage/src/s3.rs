//! Amazon S3 object store
//!
//! One `PutObject` request per write. The SDK client is built once at process
//! start and shared by every invocation; credentials are resolved lazily by
//! the SDK on first use.

use std::future::Future;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::{ObjectStore, PutObject, StoreError};

/// S3-backed object store
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Wrap an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default credential and region chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_from_env().await;
        Self::new(Client::new(&config))
    }

    async fn put(&self, object: PutObject) -> Result<(), StoreError> {
        let PutObject {
            bucket,
            key,
            body,
            content_type,
        } = object;

        self.client
            .put_object()
            .bucket(&bucket)
            .key(key.as_str())
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StoreError::Backend {
                bucket: bucket.clone(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }
}

impl ObjectStore for S3Store {
    fn put_object(
        &self,
        object: PutObject,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        self.put(object)
    }
}
