//! download command - Download an object from the bucket

use std::path::PathBuf;

use clap::Args;
use s3fm_core::ObjectStore;

use crate::bucket::BucketClient;
use crate::exit_code::ExitCode;

/// Download an object
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Key of the object to download
    pub key: String,

    /// Local target path (defaults to the key's file name)
    pub file: Option<PathBuf>,
}

/// Execute the download command
pub async fn execute<S: ObjectStore>(args: DownloadArgs, client: &BucketClient<S>) -> ExitCode {
    if client.download(&args.key, args.file.as_deref()).await {
        ExitCode::Success
    } else {
        ExitCode::GeneralError
    }
}
