//! HTTP transport seam for source adapters.
//!
//! The exchange is reached through the [`HttpClient`] trait so tests can
//! substitute a canned transport for the live API.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Request envelope used by adapter transport calls.
///
/// The catalog API is a public, unauthenticated GET surface, so a request
/// is just a URL and a timeout budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub timeout_ms: u64,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: 10_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Response envelope returned by an adapter transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
    retryable: bool,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: true,
        }
    }

    pub fn non_retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Adapter transport contract that supports async execution.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Production HTTP client using reqwest for real API calls.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default configuration.
    pub fn new() -> Self {
        Self {
            client: Arc::new(
                reqwest::Client::builder()
                    .user_agent("symfetch/0.1.0")
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new()),
            ),
        }
    }

    /// Create a ReqwestHttpClient with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let timeout = std::time::Duration::from_millis(request.timeout_ms);

            let response = self
                .client
                .get(&request.url)
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        HttpError::new(format!("request timeout: {e}"))
                    } else if e.is_connect() {
                        HttpError::new(format!("connection failed: {e}"))
                    } else {
                        HttpError::new(format!("request failed: {e}"))
                    }
                })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

            Ok(HttpResponse { status, body })
        })
    }
}

/// Canned transport for deterministic offline tests.
///
/// Returns the same response (or error) for every request and records the
/// URLs it was asked for.
#[derive(Debug, Default)]
pub struct StaticHttpClient {
    response: Option<HttpResponse>,
    error: Option<HttpError>,
    requested_urls: std::sync::Mutex<Vec<String>>,
}

impl StaticHttpClient {
    /// Respond to every request with a 200 and the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::respond_with(HttpResponse::ok_json(body))
    }

    /// Respond to every request with the given response.
    pub fn respond_with(response: HttpResponse) -> Self {
        Self {
            response: Some(response),
            error: None,
            requested_urls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Fail every request with the given transport error.
    pub fn fail_with(error: HttpError) -> Self {
        Self {
            response: None,
            error: Some(error),
            requested_urls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl HttpClient for StaticHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            if let Ok(mut urls) = self.requested_urls.lock() {
                urls.push(request.url);
            }
            if let Some(error) = &self.error {
                return Err(error.clone());
            }
            match &self.response {
                Some(response) => Ok(response.clone()),
                None => Ok(HttpResponse::ok_json("{}")),
            }
        })
    }
}
