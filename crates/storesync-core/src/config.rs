//! Cleanser configuration.
//!
//! Configuration is driven by environment variables set on the deployed
//! function. Unlike most knobs, the two bucket endpoints have no defaults:
//! both are required, and a missing one is a fatal
//! [`CleanserError::Configuration`] before any store access happens.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{CleanserError, CleanserResult};

/// Environment variable naming the source (upload) bucket.
pub const SOURCE_BUCKET_VAR: &str = "SOURCE_BUCKET";

/// Environment variable naming the destination (master) bucket.
pub const DESTINATION_BUCKET_VAR: &str = "DESTINATION_BUCKET";

/// Configuration for a cleanser invocation.
///
/// # Examples
///
/// ```
/// use storesync_core::CleanserConfig;
///
/// let config = CleanserConfig::builder()
///     .source_bucket("service-a-upload".into())
///     .destination_bucket("service-a-master".into())
///     .build();
/// assert_eq!(config.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CleanserConfig {
    /// The bucket uploaded objects are fetched from.
    pub source_bucket: String,

    /// The bucket the normalized copy is written to.
    pub destination_bucket: String,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl CleanserConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `SOURCE_BUCKET` and `DESTINATION_BUCKET` (both required) and
    /// `LOG_LEVEL` (defaults to `info`).
    ///
    /// # Errors
    ///
    /// Returns [`CleanserError::Configuration`] if either bucket variable is
    /// unset or empty.
    pub fn from_env() -> CleanserResult<Self> {
        let mut config = Self::from_vars(
            std::env::var(SOURCE_BUCKET_VAR).ok(),
            std::env::var(DESTINATION_BUCKET_VAR).ok(),
        )?;
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }
        Ok(config)
    }

    /// Build a configuration from optional bucket values, treating empty
    /// strings as absent.
    pub fn from_vars(
        source_bucket: Option<String>,
        destination_bucket: Option<String>,
    ) -> CleanserResult<Self> {
        let source_bucket = source_bucket
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing(SOURCE_BUCKET_VAR))?;
        let destination_bucket = destination_bucket
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing(DESTINATION_BUCKET_VAR))?;

        Ok(Self {
            source_bucket,
            destination_bucket,
            log_level: String::from("info"),
        })
    }
}

/// Build the error for a missing required bucket variable.
fn missing(var: &str) -> CleanserError {
    CleanserError::Configuration(format!(
        "either the source or destination bucket has not been provided ({var} is unset)"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_from_vars() {
        let config = CleanserConfig::from_vars(
            Some("upload".to_owned()),
            Some("master".to_owned()),
        )
        .expect("config");
        assert_eq!(config.source_bucket, "upload");
        assert_eq!(config.destination_bucket, "master");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_should_fail_when_source_bucket_missing() {
        let err = CleanserConfig::from_vars(None, Some("master".to_owned()))
            .expect_err("missing source bucket");
        assert!(matches!(err, CleanserError::Configuration(_)));
        assert!(err.to_string().contains(SOURCE_BUCKET_VAR));
    }

    #[test]
    fn test_should_fail_when_destination_bucket_missing() {
        let err = CleanserConfig::from_vars(Some("upload".to_owned()), None)
            .expect_err("missing destination bucket");
        assert!(matches!(err, CleanserError::Configuration(_)));
        assert!(err.to_string().contains(DESTINATION_BUCKET_VAR));
    }

    #[test]
    fn test_should_treat_empty_bucket_as_missing() {
        let err = CleanserConfig::from_vars(Some(String::new()), Some("master".to_owned()))
            .expect_err("empty source bucket");
        assert!(matches!(err, CleanserError::Configuration(_)));
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = CleanserConfig::builder()
            .source_bucket("upload".into())
            .destination_bucket("master".into())
            .build();
        let json = serde_json::to_string(&config).expect("test serialization");
        assert!(json.contains("sourceBucket"));
        assert!(json.contains("destinationBucket"));
    }
}
