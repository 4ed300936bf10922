//! s3fm - S3 file manager
//!
//! A command-line utility for basic object-storage operations (list, upload,
//! download, delete) against a single configured bucket.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use s3fm_cli::commands::{self, Cli};

#[tokio::main]
async fn main() {
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}
