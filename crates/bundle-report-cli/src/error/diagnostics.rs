//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use bundle_report::ProviderError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Provider(e) => provider_error_to_miette(e),
        CliError::Upload(msg) => miette::miette!(
            help = "Rerun with --verbose to see each attempt, or --dry-run to inspect the report",
            "Upload failed: {}",
            msg
        ),
        CliError::Metafile(e) => miette::miette!(
            help = "Build with esbuild's `metafile: true` option and pass the written JSON file",
            "{}",
            e
        ),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path relative to the current directory",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ProviderError to miette Report
pub fn provider_error_to_miette(err: ProviderError) -> Report {
    match err {
        ProviderError::MissingEnv { name } if name.starts_with("ACTIONS_ID_TOKEN") => {
            miette::miette!(
                help = "Grant the job `permissions: id-token: write` so GitHub Actions issues an OIDC token",
                "Missing required environment variable {}",
                name
            )
        }
        ProviderError::MissingEnv { name } => miette::miette!(
            help = "This variable is set by GitHub Actions; run the upload from a workflow job",
            "Missing required environment variable {}",
            name
        ),
        ProviderError::TokenRequestFailed { status, status_text } => miette::miette!(
            help = "GitHub refused to mint an identity token for this job",
            "Failed to fetch identity token: HTTP {} {}",
            status,
            status_text
        ),
        other => miette::miette!("CI provider error: {}", other),
    }
}
