//! Upload error types

use thiserror::Error;

use crate::http::HttpError;

/// Errors raised by either phase of the upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Every attempt ended in a non-2xx status
    #[error("request failed with HTTP {status} {status_text}")]
    RequestFailed { status: u16, status_text: String },

    /// A 2xx response did not carry the expected field
    #[error("malformed response: missing '{field}'")]
    MalformedResponse { field: &'static str },

    /// The request never reached the server
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// Context parameters could not be encoded
    #[error("failed to encode request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl UploadError {
    /// Status code of the last failed attempt, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            UploadError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
