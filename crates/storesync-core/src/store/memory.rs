//! In-memory object store backend.
//!
//! Thread-safe via [`DashMap`]. Used by the test suite and as a local
//! backend when running the pipeline without AWS. Objects live entirely in
//! memory as [`Bytes`]; there is no spillover, since cleanser payloads are
//! small JSON documents.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use tracing::{debug, trace};

use super::ObjectStore;
use crate::error::StoreError;

/// Composite key identifying a stored object: `(bucket, key)`.
type StorageKey = (String, String);

/// A stored object: body plus the declared content type.
#[derive(Debug, Clone)]
struct StoredObject {
    data: Bytes,
    content_type: String,
}

/// In-memory [`ObjectStore`] implementation.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use storesync_core::{MemoryObjectStore, ObjectStore};
///
/// # tokio_test::block_on(async {
/// let store = MemoryObjectStore::new();
/// store
///     .put_object("bucket", "hello.json", Bytes::from("{}"), "application/json")
///     .await
///     .unwrap();
/// let data = store.get_object("bucket", "hello.json").await.unwrap();
/// assert_eq!(data.as_ref(), b"{}");
/// # });
/// ```
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: DashMap<StorageKey, StoredObject>,
}

impl MemoryObjectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects currently stored, across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether an object exists under `(bucket, key)`.
    #[must_use]
    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        self.objects
            .contains_key(&(bucket.to_owned(), key.to_owned()))
    }

    /// The content type declared for a stored object, if present.
    #[must_use]
    pub fn content_type(&self, bucket: &str, key: &str) -> Option<String> {
        self.objects
            .get(&(bucket.to_owned(), key.to_owned()))
            .map(|obj| obj.content_type.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StoreError> {
        trace!(bucket, key, "memory get_object");
        self.objects
            .get(&(bucket.to_owned(), key.to_owned()))
            .map(|obj| obj.data.clone())
            .ok_or_else(|| StoreError::NoSuchKey {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
            })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StoreError> {
        debug!(bucket, key, size = body.len(), "memory put_object");
        self.objects.insert(
            (bucket.to_owned(), key.to_owned()),
            StoredObject {
                data: body,
                content_type: content_type.to_owned(),
            },
        );
        Ok(())
    }
}
