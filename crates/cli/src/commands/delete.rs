//! delete command - Delete an object from the bucket

use clap::Args;
use s3fm_core::ObjectStore;

use crate::bucket::BucketClient;
use crate::exit_code::ExitCode;

/// Delete an object
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Key of the object to delete
    pub key: String,
}

/// Execute the delete command
pub async fn execute<S: ObjectStore>(args: DeleteArgs, client: &BucketClient<S>) -> ExitCode {
    if client.delete(&args.key).await {
        ExitCode::Success
    } else {
        ExitCode::GeneralError
    }
}
