//! The validate-then-forward pipeline.
//!
//! One invocation handles one [`S3Event`]. Records are processed strictly in
//! delivery order and the first failure aborts the batch: the destination
//! key is fixed, so a later record must never overwrite it after an earlier
//! one has failed. Writes made before the failure persist; nothing here is
//! transactional across the batch. Retries belong to the trigger system,
//! not to the cleanser.

use serde_json::Value;
use storesync_model::{S3Event, S3EventRecord};
use tracing::{debug, info};

use crate::config::CleanserConfig;
use crate::error::{CleanserError, CleanserResult};
use crate::schema::StoreDataValidator;
use crate::store::ObjectStore;

/// Fixed key the normalized copy is written under. Every successful record
/// overwrites it (last-writer-wins within a batch).
pub const OUTPUT_KEY: &str = "stores-reference-data.json";

/// The cleanser: fetch, parse, validate, forward.
///
/// The store client and the compiled validator are injected so the pipeline
/// can run against any backend; build both once per process and reuse them
/// across invocations.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use storesync_core::{
///     Cleanser, CleanserConfig, MemoryObjectStore, ObjectStore, StoreDataValidator,
/// };
/// use storesync_model::S3Event;
///
/// # tokio_test::block_on(async {
/// let config = CleanserConfig::builder()
///     .source_bucket("upload".into())
///     .destination_bucket("master".into())
///     .build();
/// let store = MemoryObjectStore::new();
/// store
///     .put_object(
///         "upload",
///         "stores.json",
///         Bytes::from(r#"{"stores":[{"storeId":"42","storeLocation":"London","storePrefix":"LN"}]}"#),
///         "application/json",
///     )
///     .await
///     .unwrap();
///
/// let cleanser = Cleanser::new(config, store, StoreDataValidator::new().unwrap());
/// let event: S3Event = serde_json::from_str(
///     r#"{"Records":[{"s3":{"bucket":{"name":"upload"},"object":{"key":"stores.json"}}}]}"#,
/// )
/// .unwrap();
/// cleanser.handle(&event).await.unwrap();
/// assert!(cleanser.store().contains("master", storesync_core::OUTPUT_KEY));
/// # });
/// ```
#[derive(Debug)]
pub struct Cleanser<S> {
    config: CleanserConfig,
    store: S,
    validator: StoreDataValidator,
}

impl<S: ObjectStore> Cleanser<S> {
    /// Create a cleanser with injected collaborators.
    pub fn new(config: CleanserConfig, store: S, validator: StoreDataValidator) -> Self {
        Self {
            config,
            store,
            validator,
        }
    }

    /// The injected store client.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process one notification batch.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing record; later records are not
    /// attempted. See [`CleanserError`] for the per-stage taxonomy.
    pub async fn handle(&self, event: &S3Event) -> CleanserResult<()> {
        info!(
            records = event.records.len(),
            source = %self.config.source_bucket,
            destination = %self.config.destination_bucket,
            "handling notification",
        );

        // Sequential on purpose: a failure in record n must prevent record
        // n+1 from writing to the shared fixed-key destination object.
        for record in &event.records {
            self.process_record(record).await?;
        }

        Ok(())
    }

    /// Fetch, parse, validate, and forward a single record.
    async fn process_record(&self, record: &S3EventRecord) -> CleanserResult<()> {
        let key = record.s3.object.key.as_str();
        debug!(
            key,
            event_name = record.event_name.as_deref().unwrap_or_default(),
            "processing record",
        );

        // Always read from the configured source bucket, not the bucket
        // name carried on the record.
        let raw = self
            .store
            .get_object(&self.config.source_bucket, key)
            .await
            .map_err(|source| CleanserError::Fetch {
                bucket: self.config.source_bucket.clone(),
                key: key.to_owned(),
                source,
            })?;

        let document = parse_document(key, &raw)?;

        self.validator
            .validate(&document)
            .map_err(|violations| CleanserError::Validation {
                key: key.to_owned(),
                violations,
            })?;

        let body = serde_json::to_vec(&document).map_err(|err| CleanserError::Write {
            bucket: self.config.destination_bucket.clone(),
            key: OUTPUT_KEY.to_owned(),
            source: anyhow::Error::from(err).into(),
        })?;

        self.store
            .put_object(
                &self.config.destination_bucket,
                OUTPUT_KEY,
                body.into(),
                mime::APPLICATION_JSON.as_ref(),
            )
            .await
            .map_err(|source| CleanserError::Write {
                bucket: self.config.destination_bucket.clone(),
                key: OUTPUT_KEY.to_owned(),
                source,
            })?;

        info!(key, output_key = OUTPUT_KEY, "forwarded validated document");
        Ok(())
    }
}

/// Decode bytes as UTF-8 and parse as a JSON value.
///
/// An empty body falls through to the JSON parser and fails there, matching
/// the documented empty-payload behavior.
fn parse_document(key: &str, raw: &[u8]) -> CleanserResult<Value> {
    let text = std::str::from_utf8(raw).map_err(|err| CleanserError::Parse {
        key: key.to_owned(),
        reason: err.to_string(),
    })?;

    serde_json::from_str(text).map_err(|err| CleanserError::Parse {
        key: key.to_owned(),
        reason: err.to_string(),
    })
}
