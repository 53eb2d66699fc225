//! reqwest-backed [`HttpClient`].

use async_trait::async_trait;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, Method};

/// Production transport over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a preconfigured client (proxies, timeouts, custom roots).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        };

        let mut builder = self.client.request(method, url.as_str());
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if !body.is_empty() {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| HttpError::new(url.as_str(), err))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|err| HttpError::new(url.as_str(), err))?;

        tracing::debug!(url = %url, status = status.as_u16(), "response received");

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            body: body.to_vec(),
        })
    }
}
