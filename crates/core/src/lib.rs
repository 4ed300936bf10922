//! s3fm-core: Core library for the s3fm file manager
//!
//! This crate provides the core functionality for the s3fm CLI, including:
//! - Environment-derived configuration
//! - Validation helpers for local paths and object keys
//! - ObjectStore trait for bucket operations
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod config;
pub mod error;
pub mod traits;
pub mod validate;

pub use config::{Config, DEFAULT_REGION};
pub use error::{Error, Result};
pub use traits::{ObjectInfo, ObjectStore};
