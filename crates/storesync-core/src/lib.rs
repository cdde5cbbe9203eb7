//! Store reference data cleanser for StoreSync.
//!
//! Implements the validate-then-forward pipeline triggered by object uploads:
//! fetch the uploaded object from the source bucket, parse it as JSON,
//! validate it against the store reference data schema, and on success write
//! the normalized copy to the destination bucket under a fixed key.
//!
//! # Architecture
//!
//! ```text
//! S3 event notification
//!        |
//!        v
//!    Cleanser (sequential per-record loop, abort on first error)
//!        |
//!        v
//!  StoreDataValidator (compiled JSON Schema gate)
//!        |
//!        v
//!   ObjectStore (S3ObjectStore | MemoryObjectStore)
//! ```

pub mod cleanser;
pub mod config;
pub mod error;
pub mod schema;
pub mod store;

pub use cleanser::{Cleanser, OUTPUT_KEY};
pub use config::CleanserConfig;
pub use error::{CleanserError, CleanserResult, StoreError};
pub use schema::{SchemaBuildError, StoreDataValidator, ValidationViolations, Violation};
pub use store::{MemoryObjectStore, ObjectStore, S3ObjectStore};
