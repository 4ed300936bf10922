//! s3fm-s3: S3 SDK adapter for the s3fm file manager
//!
//! This crate provides the implementation of the ObjectStore trait
//! using the aws-sdk-s3 crate. It is the only crate that directly
//! depends on the AWS SDK; SDK errors are classified into the core
//! error kinds at this boundary.

pub mod client;

pub use client::S3Store;
