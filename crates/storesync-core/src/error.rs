//! Error types for the cleanser pipeline.
//!
//! [`CleanserError`] is the invocation-level taxonomy: one variant per
//! pipeline stage, propagated uncaught to the trigger system. There is no
//! local recovery or retry; redelivery is the trigger's decision.

use crate::schema::ValidationViolations;

/// Error from an [`ObjectStore`](crate::store::ObjectStore) operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The specified key does not exist in the bucket.
    #[error("the specified key does not exist: {bucket}/{key}")]
    NoSuchKey {
        /// The bucket that was queried.
        bucket: String,
        /// The key that was not found.
        key: String,
    },

    /// Any other backend failure (access denied, transient fault, I/O).
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Invocation-level error for the cleanser pipeline.
///
/// The first failing record aborts the batch; the whole invocation is
/// reported as failed to the caller.
#[derive(Debug, thiserror::Error)]
pub enum CleanserError {
    /// A required endpoint is missing from the configuration. Fatal; no
    /// processing is attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Reading the uploaded object from the source bucket failed.
    #[error("failed to fetch object {key} from source bucket {bucket}")]
    Fetch {
        /// The source bucket.
        bucket: String,
        /// The object key from the event record.
        key: String,
        /// The underlying store failure.
        #[source]
        source: StoreError,
    },

    /// The uploaded object is not valid UTF-8 JSON.
    #[error("object {key} could not be parsed as JSON: {reason}")]
    Parse {
        /// The object key from the event record.
        key: String,
        /// The decode or parse failure.
        reason: String,
    },

    /// The uploaded document failed schema conformance.
    #[error("imported data in {key} failed schema conformance: {violations}")]
    Validation {
        /// The object key from the event record.
        key: String,
        /// The individual schema violations.
        violations: ValidationViolations,
    },

    /// Writing the normalized copy to the destination bucket failed.
    #[error("failed to write object {key} to destination bucket {bucket}")]
    Write {
        /// The destination bucket.
        bucket: String,
        /// The fixed output key.
        key: String,
        /// The underlying store failure.
        #[source]
        source: StoreError,
    },
}

/// Convenience result type for cleanser operations.
pub type CleanserResult<T> = Result<T, CleanserError>;
