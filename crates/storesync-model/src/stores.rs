//! Store reference data types.
//!
//! The typed view of the document the cleanser forwards. Schema enforcement
//! (property regex patterns, the single-top-level-key rule) happens against
//! the raw JSON value in `storesync-core`; these types exist for downstream
//! consumers that want to work with validated data.

use serde::{Deserialize, Serialize};

/// A single store entry in the reference data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    /// Numeric store identifier, digits only (e.g. `"42"`).
    pub store_id: String,

    /// Store location name, letters and hyphens only (e.g. `"Milton-Keynes"`).
    pub store_location: String,

    /// Short alphabetic store prefix (e.g. `"LN"`).
    pub store_prefix: String,
}

/// The store reference data document.
///
/// `stores` is both required and the only allowed top-level property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreDataDocument {
    /// The stores, in upload order.
    pub stores: Vec<StoreRecord>,
}
