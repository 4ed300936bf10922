//! upload command - Upload a local file to the bucket

use std::path::PathBuf;

use clap::Args;
use s3fm_core::ObjectStore;

use crate::bucket::BucketClient;
use crate::exit_code::ExitCode;

/// Upload a file
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Local file to upload
    pub file: PathBuf,

    /// Destination key (defaults to the file name)
    pub key: Option<String>,
}

/// Execute the upload command
pub async fn execute<S: ObjectStore>(args: UploadArgs, client: &BucketClient<S>) -> ExitCode {
    if client.upload(&args.file, args.key.as_deref()).await {
        ExitCode::Success
    } else {
        ExitCode::GeneralError
    }
}
