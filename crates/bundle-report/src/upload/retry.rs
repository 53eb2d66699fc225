//! Fixed-delay retry for single HTTP requests.

use std::future::Future;
use std::time::Duration;

use crate::http::{HttpError, HttpResponse};

use super::UploadError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// How many times to try a request and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first; values below 1 act as 1
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

/// Run `attempt` until it returns a 2xx response or the policy is exhausted.
///
/// Non-2xx responses are retried after `policy.delay`. When the last attempt
/// still fails, the result is [`UploadError::RequestFailed`] with that
/// attempt's status. Transport errors are returned immediately without
/// retrying.
pub async fn with_retry<F, Fut>(policy: RetryPolicy, mut attempt: F) -> Result<HttpResponse, UploadError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<HttpResponse, HttpError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut tries = 1;

    loop {
        let response = attempt().await?;
        if response.is_success() {
            return Ok(response);
        }

        if tries >= max_attempts {
            return Err(UploadError::RequestFailed {
                status: response.status,
                status_text: response.status_text,
            });
        }

        tracing::warn!(
            attempt = tries,
            max_attempts,
            status = response.status,
            "request failed, retrying in {:?}",
            policy.delay
        );
        tokio::time::sleep(policy.delay).await;
        tries += 1;
    }
}
