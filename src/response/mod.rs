//! # Response Value
//!
//! The slice of an HTTP response the checks read: status code, headers, raw
//! body and elapsed time. Checks never own or mutate the host's response;
//! callers build a `Response` (directly, or from a `reqwest::Response` via
//! [`Response::capture`]) and pass it in by reference.

use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

/// An immutable snapshot of an HTTP response.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub elapsed_ms: u64,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
            elapsed_ms: 0,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_elapsed(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Parse the body as JSON.
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Snapshot a `reqwest::Response`. `started` is the instant the request
    /// was sent; elapsed time is taken before the body is read so it
    /// reflects time-to-response, not download time.
    pub async fn capture(response: reqwest::Response, started: Instant) -> Result<Self, String> {
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            let value = value.to_str().unwrap_or("<binary>");
            headers.insert(name.to_string(), value.to_string());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read response: {e}"))?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(Self {
            status,
            headers,
            body,
            elapsed_ms,
        })
    }
}
