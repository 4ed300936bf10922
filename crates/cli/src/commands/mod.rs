//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations. The
//! storage wrapper is constructed exactly once per invocation, before the
//! command runs; an initialization failure aborts the whole invocation.

use clap::{Parser, Subcommand};

use s3fm_core::Config;
use s3fm_s3::S3Store;

use crate::bucket::BucketClient;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod completions;
mod delete;
mod download;
mod list;
mod upload;

const EXAMPLES: &str = "\
Examples:
  s3fm list
  s3fm list documents/
  s3fm upload ./data.txt
  s3fm upload ./data.txt documents/data.txt
  s3fm download documents/data.txt
  s3fm delete documents/data.txt
";

/// s3fm - S3 file manager
///
/// Basic object-storage operations against the bucket configured in the
/// environment (S3_BUCKET_NAME).
#[derive(Parser, Debug)]
#[command(name = "s3fm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List objects in the bucket
    List(list::ListArgs),

    /// Upload a local file to the bucket
    Upload(upload::UploadArgs),

    /// Download an object from the bucket
    Download(download::DownloadArgs),

    /// Delete an object from the bucket
    Delete(delete::DeleteArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        quiet: cli.quiet,
    };
    let formatter = Formatter::new(output_config);

    // Completions never touch the environment or the network
    let command = match cli.command {
        Commands::Completions(args) => return completions::execute(args),
        command => command,
    };

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to initialize S3 client: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    let store = match S3Store::connect(&config).await {
        Ok(s) => s,
        Err(e) => {
            formatter.error(&format!("Failed to initialize S3 client: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    formatter.success(&format!("Connected to S3 bucket: {}", config.bucket));
    tracing::info!(bucket = %config.bucket, region = %config.region, "connected");

    let client = BucketClient::new(store, config.bucket, formatter);

    match command {
        Commands::List(args) => list::execute(args, &client).await,
        Commands::Upload(args) => upload::execute(args, &client).await,
        Commands::Download(args) => download::execute(args, &client).await,
        Commands::Delete(args) => delete::execute(args, &client).await,
        Commands::Completions(_) => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_default_prefix() {
        let cli = Cli::try_parse_from(["s3fm", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.prefix, ""),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_list_with_prefix() {
        let cli = Cli::try_parse_from(["s3fm", "list", "documents/"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.prefix, "documents/"),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_upload_requires_file() {
        assert!(Cli::try_parse_from(["s3fm", "upload"]).is_err());

        let cli = Cli::try_parse_from(["s3fm", "upload", "./data.txt"]).unwrap();
        match cli.command {
            Commands::Upload(args) => {
                assert_eq!(args.file.to_str().unwrap(), "./data.txt");
                assert!(args.key.is_none());
            }
            _ => panic!("expected upload command"),
        }
    }

    #[test]
    fn test_parse_upload_with_key() {
        let cli =
            Cli::try_parse_from(["s3fm", "upload", "./data.txt", "documents/data.txt"]).unwrap();
        match cli.command {
            Commands::Upload(args) => {
                assert_eq!(args.key.as_deref(), Some("documents/data.txt"));
            }
            _ => panic!("expected upload command"),
        }
    }

    #[test]
    fn test_parse_download_requires_key() {
        assert!(Cli::try_parse_from(["s3fm", "download"]).is_err());

        let cli = Cli::try_parse_from(["s3fm", "download", "documents/data.txt"]).unwrap();
        match cli.command {
            Commands::Download(args) => {
                assert_eq!(args.key, "documents/data.txt");
                assert!(args.file.is_none());
            }
            _ => panic!("expected download command"),
        }
    }

    #[test]
    fn test_parse_delete_requires_key() {
        assert!(Cli::try_parse_from(["s3fm", "delete"]).is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(Cli::try_parse_from(["s3fm", "rename", "a", "b"]).is_err());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["s3fm", "--json", "--quiet", "list"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(!cli.no_color);
    }
}
