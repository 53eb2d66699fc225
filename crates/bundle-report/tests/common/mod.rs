//! Shared helpers for integration tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bundle_report::http::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Fake endpoint that answers with a fixed sequence of responses.
#[derive(Debug, Default)]
pub struct FakeEndpoint {
    responses: Mutex<VecDeque<HttpResponse>>,
    pub requests: Mutex<Vec<HttpRequest>>,
}

impl FakeEndpoint {
    pub fn new(responses: impl IntoIterator<Item = (u16, &'static str, &'static str)>) -> Self {
        Self {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|(status, text, body)| HttpResponse::new(status, text, body))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url))
            .collect()
    }
}

#[async_trait]
impl HttpClient for FakeEndpoint {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| HttpError::new(url, "unexpected request"))
    }
}
