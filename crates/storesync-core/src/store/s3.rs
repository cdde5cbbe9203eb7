//! S3-backed object store.
//!
//! Thin wrapper over the AWS SDK client. `NoSuchKey` is surfaced as its own
//! variant so the pipeline can report a missing upload distinctly; every
//! other SDK failure is passed through opaquely.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::debug;

use super::ObjectStore;
use crate::error::StoreError;

/// [`ObjectStore`] backed by an S3-compatible service.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Wrap an already-configured SDK client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a store from the ambient AWS environment.
    ///
    /// Uses the default credential/region chain. `S3_ENDPOINT_URL`, when
    /// set, points the client at a custom endpoint with path-style
    /// addressing (local S3-compatible servers).
    pub async fn from_env() -> Self {
        let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);

        if let Ok(endpoint) = std::env::var("S3_ENDPOINT_URL") {
            debug!(endpoint = %endpoint, "using custom S3 endpoint");
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StoreError> {
        debug!(bucket, key, "s3 get_object");
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    StoreError::NoSuchKey {
                        bucket: bucket.to_owned(),
                        key: key.to_owned(),
                    }
                } else {
                    StoreError::Backend(anyhow::Error::from(service_err))
                }
            })?;

        let data = resp
            .body
            .collect()
            .await
            .map_err(|err| StoreError::Backend(anyhow::Error::from(err)))?;

        Ok(data.into_bytes())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StoreError> {
        debug!(bucket, key, size = body.len(), content_type, "s3 put_object");
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|err| StoreError::Backend(anyhow::Error::from(err.into_service_error())))?;

        Ok(())
    }
}
