//! HTTP transport abstraction for the upload protocol
//!
//! The upload client and the CI token exchange only ever issue one request
//! and read the whole response, so the seam is a single `send` call over
//! owned request/response values.
//!
//! # Architecture
//!
//! - **[`HttpClient`]**: Trait implemented by transports
//! - **[`ReqwestClient`]**: Production transport (feature `reqwest-client`)
//! - **[`HttpError`]**: Failures below the HTTP layer (DNS, TLS, connection)
//!
//! A non-2xx status is *not* an [`HttpError`]; it comes back as an
//! [`HttpResponse`] so callers can decide whether to retry.

#[cfg(feature = "reqwest-client")]
mod reqwest_client;

#[cfg(feature = "reqwest-client")]
pub use reqwest_client::ReqwestClient;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Transport failure: the request never produced an HTTP status.
#[derive(Debug, Error)]
#[error("request to {url} failed: {message}")]
pub struct HttpError {
    pub url: String,
    pub message: String,
}

impl HttpError {
    pub fn new(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self {
            url: url.into(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        })
    }
}

/// An outgoing request with a fully buffered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A received response with a fully buffered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase, e.g. `"Not Found"`; may be empty
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport used for every network call in this crate.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use bundle_report::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// #[derive(Debug)]
/// struct AlwaysOk;
///
/// #[async_trait]
/// impl HttpClient for AlwaysOk {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(200, "OK", r#"{"url":"https://example.com"}"#))
///     }
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync + fmt::Debug {
    /// Send `request` and buffer the whole response.
    ///
    /// Returns `Ok` for every response that has a status line, including
    /// 4xx and 5xx.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
