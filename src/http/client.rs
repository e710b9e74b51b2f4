//! HTTP client for smoke testing
//!
//! Thin wrapper over reqwest with structured request building. Requests are
//! assembled from explicit method, URL, headers and body; nothing here shells
//! out or evaluates command strings.

use anyhow::{Context, Result};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// HTTP client errors
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),
}

/// HTTP client for smoke requests
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Option<String>,
    default_headers: HeaderMap,
    timeout_secs: u64,
}

impl HttpClient {
    /// Create client with the given request timeout
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: None,
            default_headers: HeaderMap::new(),
            timeout_secs,
        })
    }

    /// Set base URL for requests
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Add a header sent on every request
    pub fn default_header(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("Invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("Invalid header value")?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Build full URL
    fn build_url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => {
                if path.starts_with("http://") || path.starts_with("https://") {
                    path.to_string()
                } else {
                    format!("{}{}", base.trim_end_matches('/'), path)
                }
            }
            None => path.to_string(),
        }
    }

    /// Send HTTP request
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.build_url(&request.url);
        debug!("Sending {} request to {}", request.method, url);

        let method =
            Method::from_bytes(request.method.as_bytes()).context("Invalid HTTP method")?;

        let mut req_builder = self.client.request(method, &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let start = std::time::Instant::now();

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                anyhow::anyhow!(HttpError::Timeout(self.timeout_secs))
            } else if e.is_connect() {
                anyhow::anyhow!(HttpError::ConnectionRefused(url.clone()))
            } else {
                anyhow::anyhow!(HttpError::RequestFailed(e.to_string()))
            }
        })?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        debug!(
            "Response: {} {} in {}ms",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            duration_ms
        );

        Ok(HttpResponse {
            status_code: status.as_u16(),
            body,
            duration_ms,
        })
    }

}

/// HTTP request builder
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// HTTP response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request_builder() {
        let req = HttpRequest::post("http://example.com/v1/card/generate")
            .header("X-API-KEY", "secret")
            .header("Content-Type", "application/json")
            .body("{}");

        assert_eq!(req.method, "POST");
        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_build_url_joins_base_and_path() {
        let client = HttpClient::with_timeout(5)
            .unwrap()
            .base_url("http://localhost:9000/");

        assert_eq!(client.build_url("/health"), "http://localhost:9000/health");
        assert_eq!(
            client.build_url("http://other:1234/x"),
            "http://other:1234/x"
        );
    }
}
