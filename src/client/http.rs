//! Reqwest-backed transport
//!
//! Owns transport details only: URL resolution, headers, status mapping and
//! JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::Value;

use super::{RemoteRequest, Transport};
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport with an explicit request timeout
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RemoteRequest) -> AppResult<Value> {
        let url = self.resolve(&request.path);
        tracing::debug!(method = %request.method, path = %request.path, "Calling remote API");

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(method = %request.method, path = %request.path, "Remote call failed: {}", e);
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(
                method = %request.method,
                path = %request.path,
                status = status.as_u16(),
                "Remote API answered with an error"
            );
            return Err(status_error(status, &body));
        }

        decode_body(&body)
    }
}

/// Empty bodies decode to `null`
fn decode_body(body: &[u8]) -> AppResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| AppError::Decode(format!("invalid JSON payload: {}", e)))
}

fn status_error(status: StatusCode, body: &[u8]) -> AppError {
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| extract_message(&value))
        .or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            (!text.is_empty() && text.len() <= 200).then_some(text)
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    AppError::Remote {
        status: status.as_u16(),
        message,
    }
}

fn extract_message(value: &Value) -> Option<String> {
    ["detail", "mensagem", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_string)
}
