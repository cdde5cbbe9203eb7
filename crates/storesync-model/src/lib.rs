//! Wire and data types for StoreSync.
//!
//! This crate defines the two data shapes the cleanser pipeline deals with:
//!
//! - The S3 event notification payload ([`S3Event`]) delivered when objects
//!   are created in the upload bucket.
//! - The store reference data document ([`StoreDataDocument`]) that uploaded
//!   objects must conform to before being forwarded downstream.

mod event;
mod stores;

pub use event::{BucketEntity, ObjectEntity, S3Entity, S3Event, S3EventRecord};
pub use stores::{StoreDataDocument, StoreRecord};
