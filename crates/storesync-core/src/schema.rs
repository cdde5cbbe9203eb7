//! The store reference data schema and its compiled validator.
//!
//! Schema validation is the hard gate of the pipeline: a document that does
//! not conform is never forwarded. The schema is fixed and embedded here;
//! [`StoreDataValidator`] compiles it once so repeated invocations reuse the
//! same validator (inject it into the cleanser rather than rebuilding it per
//! record).

use std::fmt;

use jsonschema::Validator;
use serde_json::{Value, json};

/// The JSON Schema every uploaded document must conform to.
///
/// `stores` is required and must be the only top-level property
/// (`minProperties` = `maxProperties` = 1). Each store record carries a
/// digits-only `storeId`, a letters-and-hyphens `storeLocation`, and a
/// letters-only `storePrefix`.
#[must_use]
pub fn stores_schema() -> Value {
    json!({
        "type": "object",
        "required": ["stores"],
        "minProperties": 1,
        "maxProperties": 1,
        "properties": {
            "stores": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["storeId", "storeLocation", "storePrefix"],
                    "properties": {
                        "storeId": {
                            "type": "string",
                            "pattern": "^[0-9]+$",
                        },
                        "storeLocation": {
                            "type": "string",
                            "pattern": "^[a-zA-Z-]+$",
                        },
                        "storePrefix": {
                            "type": "string",
                            "pattern": "^[a-zA-Z]+$",
                        },
                    },
                },
            },
        },
    })
}

/// A single schema violation with the instance path it occurred at.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the document.
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// The full set of violations from one validation pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationViolations(pub Vec<Violation>);

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// The schema could not be compiled into a validator.
#[derive(Debug, thiserror::Error)]
#[error("failed to compile store data schema: {0}")]
pub struct SchemaBuildError(String);

/// Compiled validator for the store reference data schema.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storesync_core::StoreDataValidator;
///
/// let validator = StoreDataValidator::new().unwrap();
/// let doc = json!({"stores": [
///     {"storeId": "42", "storeLocation": "London", "storePrefix": "LN"}
/// ]});
/// assert!(validator.validate(&doc).is_ok());
/// ```
pub struct StoreDataValidator {
    validator: Validator,
}

impl fmt::Debug for StoreDataValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreDataValidator").finish_non_exhaustive()
    }
}

impl StoreDataValidator {
    /// Compile the embedded schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaBuildError`] if the schema does not compile; with the
    /// embedded schema this only happens if the schema itself is broken.
    pub fn new() -> Result<Self, SchemaBuildError> {
        let schema = stores_schema();
        let validator =
            jsonschema::validator_for(&schema).map_err(|e| SchemaBuildError(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Validate a parsed document against the schema.
    ///
    /// # Errors
    ///
    /// Returns every violation found, in document order.
    pub fn validate(&self, document: &Value) -> Result<(), ValidationViolations> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(document)
            .map(|err| Violation {
                instance_path: err.instance_path.to_string(),
                message: err.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationViolations(violations))
        }
    }

    /// Whether a parsed document conforms to the schema.
    #[must_use]
    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }
}
