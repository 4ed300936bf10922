//! list command - List objects in the bucket
//!
//! Lists all objects under an optional key prefix. Listing failures are
//! swallowed into an empty result by the wrapper, so this command never
//! fails the invocation.

use clap::Args;
use s3fm_core::{ObjectInfo, ObjectStore};
use serde::Serialize;

use crate::bucket::BucketClient;
use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// List objects under an optional key prefix
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Key prefix to filter by
    #[arg(default_value = "")]
    pub prefix: String,
}

/// Output structure for the list command (JSON format)
#[derive(Debug, Serialize)]
struct ListOutput {
    prefix: String,
    objects: Vec<ObjectInfo>,
    total_objects: usize,
    total_size_bytes: i64,
}

/// Execute the list command
pub async fn execute<S: ObjectStore>(args: ListArgs, client: &BucketClient<S>) -> ExitCode {
    let objects = client.list(&args.prefix).await;
    render(&args.prefix, objects, client.formatter());

    ExitCode::Success
}

fn render(prefix: &str, objects: Vec<ObjectInfo>, formatter: &Formatter) {
    if formatter.is_json() {
        let total_size_bytes = objects.iter().map(|o| o.size_bytes).sum();
        let output = ListOutput {
            prefix: prefix.to_string(),
            total_objects: objects.len(),
            total_size_bytes,
            objects,
        };
        formatter.json(&output);
        return;
    }

    if objects.is_empty() {
        formatter.println(&format!("No objects found with prefix '{prefix}'"));
        return;
    }

    formatter.println(&format!("Objects in bucket (prefix: '{prefix}'):"));
    for object in &objects {
        let date = object
            .last_modified
            .map(|d| d.strftime("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "                   ".to_string());
        formatter.println(&format!(
            "  [{date}] {:>10} {}",
            object.size_human, object.key
        ));
    }
}
