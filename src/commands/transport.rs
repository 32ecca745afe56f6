//! HTTP Transport
//!
//! JSON-in/JSON-out seam over the network. Any non-2xx answer comes back
//! as `TransportError::Status` carrying the parsed body, so callers can
//! tell "no response" apart from "the server said no".

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// No response arrived
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("HTTP {status}")]
    Status { status: u16, body: Value },
    /// Success status but the body was not JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Minimal REST client the gateway talks through.
///
/// Paths are relative to the configured base URL (e.g. `/menu/3`).
/// Empty response bodies are reported as `Value::Null`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError>;
    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
    async fn delete(&self, path: &str) -> Result<Value, TransportError>;
}

/// `reqwest`-backed transport (uses `fetch` on wasm)
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, TransportError> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: parse_body(&text).unwrap_or(Value::Null),
            });
        }
        parse_body(&text)
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, TransportError> {
        self.send(self.client.delete(self.url(path))).await
    }
}

fn parse_body(text: &str) -> Result<Value, TransportError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| TransportError::Decode(e.to_string()))
}
