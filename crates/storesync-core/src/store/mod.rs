//! Object store access.
//!
//! The cleanser talks to blob storage through the [`ObjectStore`] trait so
//! the pipeline can be exercised without a live bucket. [`S3ObjectStore`] is
//! the deployed backend; [`MemoryObjectStore`] backs tests and local runs.

mod memory;
mod s3;

pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::StoreError;

/// Key-addressed blob storage, the cleanser's only external collaborator.
///
/// Both operations are atomic from the caller's perspective; consistency is
/// the store's own guarantee. No transactions or locking exist across calls.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full body of an object.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StoreError>;

    /// Write an object, overwriting any existing value under the key.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StoreError>;
}
