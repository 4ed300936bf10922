//! Configuration management
//!
//! Configuration is sourced from the process environment once at startup and
//! passed by reference into the store constructor. There is no configuration
//! file and no mutable global state.

use crate::error::{Error, Result};

/// Region used when AWS_DEFAULT_REGION is not set
pub const DEFAULT_REGION: &str = "us-east-1";

/// Connection settings for the configured bucket
#[derive(Debug, Clone)]
pub struct Config {
    /// Access key id (AWS_ACCESS_KEY_ID)
    pub access_key_id: String,

    /// Secret access key (AWS_SECRET_ACCESS_KEY)
    pub secret_access_key: String,

    /// Region (AWS_DEFAULT_REGION, defaults to us-east-1)
    pub region: String,

    /// Bucket all operations run against (S3_BUCKET_NAME)
    pub bucket: String,

    /// Optional endpoint override for S3-compatible servers (S3_ENDPOINT_URL)
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Fails with a `Config` error naming the first required variable that
    /// is absent or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests supply a closure over a map instead
    /// of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| -> Result<String> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(Error::Config(format!(
                    "Missing required environment variable: {key}"
                ))),
            }
        };

        Ok(Self {
            access_key_id: require("AWS_ACCESS_KEY_ID")?,
            secret_access_key: require("AWS_SECRET_ACCESS_KEY")?,
            region: lookup("AWS_DEFAULT_REGION")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            bucket: require("S3_BUCKET_NAME")?,
            endpoint_url: lookup("S3_ENDPOINT_URL").filter(|v| !v.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + '_ {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_lookup(lookup_from(&[
            ("AWS_ACCESS_KEY_ID", "AKIATEST"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
            ("S3_BUCKET_NAME", "my-bucket"),
            ("S3_ENDPOINT_URL", "http://localhost:9000"),
        ]))
        .unwrap();

        assert_eq!(config.access_key_id, "AKIATEST");
        assert_eq!(config.secret_access_key, "secret");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.bucket, "my-bucket");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_region_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("AWS_ACCESS_KEY_ID", "AKIATEST"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("S3_BUCKET_NAME", "my-bucket"),
        ]))
        .unwrap();

        assert_eq!(config.region, DEFAULT_REGION);
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn test_missing_access_key() {
        let result = Config::from_lookup(lookup_from(&[
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("S3_BUCKET_NAME", "my-bucket"),
        ]));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("AWS_ACCESS_KEY_ID"));
    }

    #[test]
    fn test_missing_bucket() {
        let result = Config::from_lookup(lookup_from(&[
            ("AWS_ACCESS_KEY_ID", "AKIATEST"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
        ]));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("S3_BUCKET_NAME"));
    }

    #[test]
    fn test_blank_value_is_missing() {
        let result = Config::from_lookup(lookup_from(&[
            ("AWS_ACCESS_KEY_ID", "   "),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("S3_BUCKET_NAME", "my-bucket"),
        ]));

        assert!(result.is_err());
    }
}
