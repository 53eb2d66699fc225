use super::validation::{parse_api_url, parse_bundle_name};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a metafile into a bundle report
    ///
    /// Writes pretty-printed report JSON to --out, or to stdout when no
    /// output file is given.
    Convert(ConvertArgs),

    /// Convert a metafile and upload the report to Codecov
    ///
    /// Outside GitHub Actions the upload is skipped with a warning.
    Upload(UploadArgs),

    /// Parse a metafile and print what it contains
    Check(CheckArgs),
}

/// Options shared by every command that produces a report.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Path to the metafile esbuild wrote (`metafile: true`)
    #[arg(value_name = "METAFILE")]
    pub metafile: PathBuf,

    /// Name the bundle is tracked under in Codecov
    #[arg(short = 'n', long, value_parser = parse_bundle_name)]
    pub bundle_name: Option<String>,

    /// Directory holding the emitted files, enables gzip sizes
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Bundler name recorded in the report (e.g. esbuild)
    #[arg(long, value_name = "NAME")]
    pub bundler_name: Option<String>,

    /// Bundler version recorded in the report
    #[arg(long, value_name = "VERSION")]
    pub bundler_version: Option<String>,

    /// Build duration in milliseconds
    #[arg(long, value_name = "MS")]
    pub duration: Option<u64>,

    /// Path to a config file (defaults to ./bundle-report.json when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for `bundle-report convert`
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for `bundle-report upload`
#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Bundle-analysis endpoint that issues presigned upload URLs
    #[arg(long, value_name = "URL", value_parser = parse_api_url)]
    pub api_url: Option<String>,

    /// Attempts per request before giving up
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub retry_attempts: Option<u32>,

    /// Pause between attempts in milliseconds
    #[arg(long, value_name = "MS")]
    pub retry_delay_ms: Option<u64>,

    /// Print the report instead of uploading it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `bundle-report check`
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the metafile to inspect
    #[arg(value_name = "METAFILE")]
    pub metafile: PathBuf,
}
