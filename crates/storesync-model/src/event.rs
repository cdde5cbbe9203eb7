//! S3 event notification types.
//!
//! Models the JSON payload S3 delivers on `s3:ObjectCreated:*` events. Only
//! the bucket name and object key are consumed by the pipeline; the remaining
//! fields are carried so a full event document round-trips cleanly and stays
//! available for logging.

use serde::{Deserialize, Serialize};

/// An S3 event notification: an ordered batch of object-creation records.
///
/// One notification may bundle multiple records; the pipeline processes them
/// strictly in the order they appear.
///
/// # Examples
///
/// ```
/// use storesync_model::S3Event;
///
/// let event: S3Event = serde_json::from_str(
///     r#"{"Records":[{"eventName":"ObjectCreated:Put",
///         "s3":{"bucket":{"name":"upload"},"object":{"key":"stores.json"}}}]}"#,
/// )
/// .unwrap();
/// assert_eq!(event.records.len(), 1);
/// assert_eq!(event.records[0].s3.object.key, "stores.json");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3Event {
    /// The object-creation records, in delivery order.
    #[serde(rename = "Records")]
    pub records: Vec<S3EventRecord>,
}

/// A single object-creation record within an [`S3Event`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3EventRecord {
    /// Event schema version (e.g. `"2.1"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_version: Option<String>,

    /// Event source, always `"aws:s3"` for S3 notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,

    /// Region of the source bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,

    /// ISO-8601 timestamp of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,

    /// Event name (e.g. `"ObjectCreated:Put"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    /// The bucket and object this record describes.
    pub s3: S3Entity,
}

/// The `s3` sub-object of an event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Entity {
    /// S3 notification schema version (e.g. `"1.0"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_schema_version: Option<String>,

    /// Notification configuration ID that matched this event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,

    /// The bucket the object was created in.
    pub bucket: BucketEntity,

    /// The created object.
    pub object: ObjectEntity,
}

/// Bucket details carried on an event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketEntity {
    /// The bucket name.
    pub name: String,

    /// The bucket ARN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

/// Object details carried on an event record.
///
/// The key is used exactly as delivered; S3 percent-encodes keys in event
/// payloads and the pipeline does not decode them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectEntity {
    /// The object key.
    pub key: String,

    /// Object size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// The object's ETag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,

    /// Opaque value ordering events for a given key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequencer: Option<String>,
}
