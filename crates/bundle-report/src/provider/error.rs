//! CI provider error types

use thiserror::Error;

use crate::http::HttpError;

/// Errors raised while collecting CI identity and context
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A variable the CI host is expected to set is absent
    #[error("missing required environment variable {name}")]
    MissingEnv { name: &'static str },

    /// The token endpoint answered with a non-2xx status
    #[error("failed to fetch identity token: HTTP {status} {status_text}")]
    TokenRequestFailed { status: u16, status_text: String },

    /// The token endpoint answered 2xx without the expected field
    #[error("identity token response is missing the '{field}' field")]
    MissingField { field: &'static str },

    /// The token endpoint answered 2xx with a body that is not JSON
    #[error("identity token response is not valid JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The token request never reached the server
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ProviderError {
    pub fn missing_env(name: &'static str) -> Self {
        Self::MissingEnv { name }
    }
}
