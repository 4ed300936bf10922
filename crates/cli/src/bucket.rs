//! Bucket-level operations
//!
//! Wraps an ObjectStore with the validation, console, and logging behavior
//! shared by all commands. Upload, download, and delete report failure as a
//! boolean so the dispatcher can pick an exit code; `list` swallows failures
//! into an empty result. Console output and log events are emitted
//! independently of each other.

use std::path::{Path, PathBuf};

use s3fm_core::validate::{
    format_file_size, get_file_mime_type, is_allowed_file_type, validate_file_path,
    validate_s3_key,
};
use s3fm_core::{Error, ObjectInfo, ObjectStore};
use tracing::{error, info, warn};

use crate::output::Formatter;

/// High-level client for the configured bucket
pub struct BucketClient<S> {
    store: S,
    bucket: String,
    formatter: Formatter,
}

impl<S: ObjectStore> BucketClient<S> {
    /// Wrap a connected store
    pub fn new(store: S, bucket: impl Into<String>, formatter: Formatter) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            formatter,
        }
    }

    /// Name of the configured bucket
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Formatter shared with the commands
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// List all objects under `prefix`.
    ///
    /// Listing failures are reported and then swallowed into an empty
    /// result, so callers can rely on this never failing. The cost is that
    /// a failed listing is indistinguishable from an empty bucket.
    pub async fn list(&self, prefix: &str) -> Vec<ObjectInfo> {
        match self.store.list_objects(prefix).await {
            Ok(objects) => {
                info!(bucket = %self.bucket, prefix, count = objects.len(), "listed objects");
                objects
            }
            Err(e) => {
                error!(bucket = %self.bucket, prefix, error = %e, "failed to list objects");
                self.formatter.error(&format!("Error listing objects: {e}"));
                Vec::new()
            }
        }
    }

    /// Upload a local file, deriving the key from the file name when absent.
    pub async fn upload(&self, local_path: &Path, remote_key: Option<&str>) -> bool {
        if !validate_file_path(local_path) {
            let e = Error::InvalidPath(format!("File not found: {}", local_path.display()));
            error!(path = %local_path.display(), "upload rejected");
            self.formatter.error(&e.to_string());
            return false;
        }

        let key = match remote_key {
            Some(k) => k.to_string(),
            None => local_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        if !validate_s3_key(&key) {
            let e = Error::InvalidKey(key);
            error!(path = %local_path.display(), error = %e, "upload rejected");
            self.formatter.error(&e.to_string());
            return false;
        }

        if !is_allowed_file_type(local_path, None) {
            warn!(path = %local_path.display(), "file type outside the default allow-list");
            self.formatter
                .warning(&format!("Unusual file type: {}", local_path.display()));
        }

        let data = match std::fs::read(local_path) {
            Ok(d) => d,
            Err(e) => {
                error!(path = %local_path.display(), error = %e, "failed to read file");
                self.formatter
                    .error(&format!("Failed to read {}: {e}", local_path.display()));
                return false;
            }
        };

        let size = data.len() as u64;
        let content_type = get_file_mime_type(local_path);

        match self.store.put_object(&key, data, content_type).await {
            Ok(_) => {
                info!(bucket = %self.bucket, key, size, "uploaded object");
                self.formatter.success(&format!(
                    "Uploaded {} -> s3://{}/{} ({})",
                    local_path.display(),
                    self.bucket,
                    key,
                    format_file_size(size)
                ));
                true
            }
            Err(e) => {
                error!(bucket = %self.bucket, key, error = %e, "upload failed");
                self.formatter
                    .error(&format!("Failed to upload {}: {e}", local_path.display()));
                false
            }
        }
    }

    /// Download an object, deriving the local name from the key when absent.
    pub async fn download(&self, remote_key: &str, local_path: Option<&Path>) -> bool {
        if !validate_s3_key(remote_key) {
            let e = Error::InvalidKey(remote_key.to_string());
            error!(error = %e, "download rejected");
            self.formatter.error(&e.to_string());
            return false;
        }

        let target: PathBuf = match local_path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(local_name_for_key(remote_key)),
        };

        match self.store.get_object(remote_key).await {
            Ok(data) => {
                if let Err(e) = write_local_file(&target, &data) {
                    error!(path = %target.display(), error = %e, "failed to write file");
                    self.formatter
                        .error(&format!("Failed to write {}: {e}", target.display()));
                    return false;
                }

                let size = data.len() as u64;
                info!(bucket = %self.bucket, key = remote_key, size, "downloaded object");
                self.formatter.success(&format!(
                    "Downloaded s3://{}/{} -> {} ({})",
                    self.bucket,
                    remote_key,
                    target.display(),
                    format_file_size(size)
                ));
                true
            }
            Err(e @ Error::NotFound(_)) => {
                error!(bucket = %self.bucket, key = remote_key, error = %e, "object not found");
                self.formatter
                    .error(&format!("Object not found: {remote_key}"));
                false
            }
            Err(e) => {
                error!(bucket = %self.bucket, key = remote_key, error = %e, "download failed");
                self.formatter
                    .error(&format!("Failed to download {remote_key}: {e}"));
                false
            }
        }
    }

    /// Delete an object. There is no existence pre-check, so deleting an
    /// absent key reports success.
    pub async fn delete(&self, remote_key: &str) -> bool {
        if !validate_s3_key(remote_key) {
            let e = Error::InvalidKey(remote_key.to_string());
            error!(error = %e, "delete rejected");
            self.formatter.error(&e.to_string());
            return false;
        }

        match self.store.delete_object(remote_key).await {
            Ok(()) => {
                info!(bucket = %self.bucket, key = remote_key, "deleted object");
                self.formatter
                    .success(&format!("Deleted s3://{}/{remote_key}", self.bucket));
                true
            }
            Err(e) => {
                error!(bucket = %self.bucket, key = remote_key, error = %e, "delete failed");
                self.formatter
                    .error(&format!("Failed to delete {remote_key}: {e}"));
                false
            }
        }
    }
}

/// Local file name derived from the last segment of a key
fn local_name_for_key(key: &str) -> String {
    key.rsplit('/').next().unwrap_or(key).to_string()
}

/// Write object contents, creating parent directories as needed
fn write_local_file(target: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(target, data)
}
