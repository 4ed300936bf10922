//! Error types for s3fm-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.
//! The SDK adapter translates storage-backend errors into these kinds, so the
//! rest of the workspace never sees SDK-specific error shapes.

use thiserror::Error;

/// Result type alias for s3fm-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3fm-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or malformed environment variable)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credentials are missing or were rejected by the backend
    #[error("AWS credentials not found or rejected")]
    NoCredentials,

    /// The configured bucket does not exist
    #[error("Bucket '{0}' not found")]
    BucketNotFound(String),

    /// Connectivity failure during the initial bucket probe
    #[error("Error connecting to S3: {0}")]
    Connect(String),

    /// Remote object not found
    #[error("Object not found: {0}")]
    NotFound(String),

    /// Object key failed validation
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Local path is missing or not a regular file
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error after a successful connection
    #[error("Network error: {0}")]
    Network(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,                                // UsageError
            Error::InvalidKey(_) | Error::InvalidPath(_) => 2,    // UsageError
            Error::Connect(_) | Error::Network(_) => 3,           // NetworkError
            Error::NoCredentials => 4,                            // AuthError
            Error::NotFound(_) | Error::BucketNotFound(_) => 5,   // NotFound
            _ => 1,                                               // GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::Config("test".into()).exit_code(), 2);
        assert_eq!(Error::InvalidKey("test".into()).exit_code(), 2);
        assert_eq!(Error::InvalidPath("test".into()).exit_code(), 2);
        assert_eq!(Error::Connect("test".into()).exit_code(), 3);
        assert_eq!(Error::Network("test".into()).exit_code(), 3);
        assert_eq!(Error::NoCredentials.exit_code(), 4);
        assert_eq!(Error::NotFound("test".into()).exit_code(), 5);
        assert_eq!(Error::BucketNotFound("test".into()).exit_code(), 5);
        assert_eq!(Error::General("test".into()).exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Error::BucketNotFound("media-archive".into());
        assert_eq!(err.to_string(), "Bucket 'media-archive' not found");

        let err = Error::NotFound("documents/report.pdf".into());
        assert_eq!(err.to_string(), "Object not found: documents/report.pdf");

        let err = Error::InvalidPath("/bad/path".into());
        assert_eq!(err.to_string(), "Invalid path: /bad/path");
    }
}
