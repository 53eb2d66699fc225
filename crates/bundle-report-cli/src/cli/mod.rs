//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `bundle-report convert` - Write a bundle report to a file or stdout
//! - `bundle-report upload` - Build a report and upload it from GitHub Actions
//! - `bundle-report check` - Parse a metafile and summarize it

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConvertArgs, ReportArgs, UploadArgs};
pub use validation::{parse_api_url, parse_bundle_name};

/// bundle-report - esbuild bundle statistics for Codecov
#[derive(Parser, Debug)]
#[command(
    name = "bundle-report",
    version,
    about = "Convert esbuild metafiles into Codecov bundle reports",
    long_about = "bundle-report reads the metafile esbuild writes with `metafile: true`,\n\
                  turns it into a Codecov bundle-analysis report (assets, chunks, modules,\n\
                  gzip sizes) and uploads it from GitHub Actions using the job's OIDC token."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows per-asset decisions, retry attempts and request targets.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
