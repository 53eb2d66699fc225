//! Upload command implementation.
//!
//! Converts the metafile, then runs the GitHub Actions flow: identity
//! token, build context, presigned URL, payload PUT.

use crate::cli::UploadArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::{CliError, Result};
use crate::ui;
use bundle_report::http::{HttpClient, ReqwestClient};
use bundle_report::provider::{fetch_identity_token, gather_context_params, is_running_in_ci};
use bundle_report::{Environment, UploadOptions, UploadResult, upload};

/// What happened to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Not running in GitHub Actions, nothing was sent
    Skipped,
    /// Stored at the presigned URL
    Uploaded { presigned_url: String },
}

/// Execute the upload command.
pub async fn execute(args: UploadArgs) -> Result<()> {
    let config = utils::load_config(&args.report, &ConfigOverrides::from(&args))?;
    let report = utils::build_report(&args.report, &config).await?;

    if config.dry_run {
        utils::write_stdout(&report.to_pretty_json()?).await?;
        ui::info("Dry run: report not uploaded");
        return Ok(());
    }

    let payload = report.to_json()?;
    let env = Environment::from_process();
    let client = ReqwestClient::new();

    match upload_report(&env, &client, &payload, &config.to_upload_options()).await? {
        UploadOutcome::Skipped => {
            ui::warning("Not running in GitHub Actions, skipping upload");
        }
        UploadOutcome::Uploaded { presigned_url } => {
            ui::print_report_summary(&report);
            ui::success("Bundle report uploaded");
            tracing::debug!(url = %presigned_url, "report stored");
        }
    }

    Ok(())
}

/// Upload `payload` if `env` describes a GitHub Actions job.
///
/// A failed upload is an error so the process exits non-zero.
pub async fn upload_report(
    env: &Environment,
    client: &dyn HttpClient,
    payload: &str,
    options: &UploadOptions,
) -> Result<UploadOutcome> {
    if !is_running_in_ci(env) {
        tracing::warn!("GITHUB_ACTIONS is not set to true, skipping upload");
        return Ok(UploadOutcome::Skipped);
    }

    let token = fetch_identity_token(env, client).await?;
    let params = gather_context_params(env)?;

    match upload(client, payload, &token, &params, options).await {
        UploadResult {
            success: true,
            presigned_url: Some(presigned_url),
            ..
        } => Ok(UploadOutcome::Uploaded { presigned_url }),
        UploadResult { error, .. } => Err(CliError::Upload(
            error.unwrap_or_else(|| "no presigned URL returned".to_string()),
        )),
    }
}
