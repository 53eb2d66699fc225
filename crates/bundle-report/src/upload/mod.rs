//! Two-phase report upload
//!
//! 1. POST the build context to the bundle-analysis endpoint, authorized with
//!    the CI identity token, and receive a presigned storage URL.
//! 2. PUT the serialized report to that URL.
//!
//! Each phase runs under [`with_retry`]. [`upload`] itself never fails: every
//! error is folded into an [`UploadResult`] for the caller to report.

mod error;
mod retry;

pub use error::UploadError;
pub use retry::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY, RetryPolicy, with_retry};

use serde::{Deserialize, Serialize};

use crate::http::{HttpClient, HttpRequest};
use crate::provider::ContextParams;

/// Codecov bundle-analysis endpoint used unless overridden.
pub const DEFAULT_API_URL: &str = "https://api.codecov.io/upload/bundle_analysis/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub api_url: String,
    pub retry: RetryPolicy,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Outcome of [`upload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presigned_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResult {
    pub fn succeeded(presigned_url: String) -> Self {
        Self {
            success: true,
            presigned_url: Some(presigned_url),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            presigned_url: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct PresignedUrlResponse {
    url: Option<String>,
}

/// Upload `payload` (a serialized report) on behalf of the job described by
/// `params`.
pub async fn upload(
    client: &dyn HttpClient,
    payload: &str,
    identity_token: &str,
    params: &ContextParams,
    options: &UploadOptions,
) -> UploadResult {
    match try_upload(client, payload, identity_token, params, options).await {
        Ok(url) => {
            tracing::info!("bundle report uploaded");
            UploadResult::succeeded(url)
        }
        Err(err) => {
            tracing::error!(error = %err, "bundle report upload failed");
            UploadResult::failed(err)
        }
    }
}

async fn try_upload(
    client: &dyn HttpClient,
    payload: &str,
    identity_token: &str,
    params: &ContextParams,
    options: &UploadOptions,
) -> Result<String, UploadError> {
    let url = request_presigned_url(client, identity_token, params, options).await?;
    put_payload(client, &url, payload, options).await?;
    Ok(url)
}

async fn request_presigned_url(
    client: &dyn HttpClient,
    identity_token: &str,
    params: &ContextParams,
    options: &UploadOptions,
) -> Result<String, UploadError> {
    let request = HttpRequest::post(options.api_url.as_str())
        .header("Authorization", format!("token {identity_token}"))
        .header("Content-Type", "application/json")
        .body(serde_json::to_vec(params)?);

    tracing::info!(endpoint = %options.api_url, "requesting presigned upload URL");
    let response = with_retry(options.retry, || client.send(request.clone())).await?;

    let body: PresignedUrlResponse = response
        .json()
        .map_err(|_| UploadError::MalformedResponse { field: "url" })?;
    body.url.ok_or(UploadError::MalformedResponse { field: "url" })
}

async fn put_payload(
    client: &dyn HttpClient,
    url: &str,
    payload: &str,
    options: &UploadOptions,
) -> Result<(), UploadError> {
    let request = HttpRequest::put(url)
        .header("Content-Type", "application/json")
        .body(payload.as_bytes());

    tracing::info!(bytes = payload.len(), "uploading bundle report");
    with_retry(options.retry, || client.send(request.clone())).await?;
    Ok(())
}
