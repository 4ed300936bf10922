//! ObjectStore trait definition
//!
//! This trait defines the interface for object-storage operations against the
//! configured bucket. It allows the CLI to be decoupled from the specific S3
//! SDK implementation and mocked in tests.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::validate::format_file_size;

/// Metadata for a remote object
#[derive(Debug, Clone, Serialize)]
pub struct ObjectInfo {
    /// Object key
    pub key: String,

    /// Size in bytes
    pub size_bytes: i64,

    /// Human-readable size
    pub size_human: String,

    /// Last modified timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<jiff::Timestamp>,
}

impl ObjectInfo {
    /// Create a new ObjectInfo with no timestamp
    pub fn new(key: impl Into<String>, size_bytes: i64) -> Self {
        Self {
            key: key.into(),
            size_bytes,
            size_human: format_file_size(size_bytes.max(0) as u64),
            last_modified: None,
        }
    }
}

/// Trait for operations against the configured bucket
///
/// Implemented by the S3 adapter; each method is a single pass-through call.
/// Implementations classify backend errors into the core error kinds
/// (`NotFound`, `NoCredentials`, `Network`) before returning them.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Check that the configured bucket exists
    async fn bucket_exists(&self) -> Result<bool>;

    /// List all objects under a key prefix, in listing order
    async fn list_objects(&self, prefix: &str) -> Result<Vec<ObjectInfo>>;

    /// Store bytes under a key
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<ObjectInfo>;

    /// Fetch the contents of an object
    async fn get_object(&self, key: &str) -> Result<Vec<u8>>;

    /// Delete an object; deleting a nonexistent key succeeds
    async fn delete_object(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_info_new() {
        let info = ObjectInfo::new("test.txt", 1024);
        assert_eq!(info.key, "test.txt");
        assert_eq!(info.size_bytes, 1024);
        assert_eq!(info.size_human, "1.00 KB");
        assert!(info.last_modified.is_none());
    }

    #[test]
    fn test_object_info_negative_size_clamped() {
        let info = ObjectInfo::new("odd.bin", -1);
        assert_eq!(info.size_human, "0.00 B");
    }

    #[test]
    fn test_object_info_serializes_without_timestamp() {
        let info = ObjectInfo::new("a.txt", 5);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["key"], "a.txt");
        assert!(json.get("last_modified").is_none());
    }
}
