//! Outbound access to the remote library REST API
//!
//! Every RPC procedure builds a [`RemoteRequest`] and hands it to a [`Transport`].
//! The production transport is [`http::HttpTransport`]; tests substitute a mock.

pub mod http;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::AppResult;

pub use http::HttpTransport;

/// One JSON call against the remote API
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub method: Method,
    /// Path relative to the configured base URL, or an absolute URL
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl RemoteRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PUT, path).with_body(body)
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PATCH, path).with_body(body)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }
}

/// Sends a request and yields the decoded JSON body of a 2xx answer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RemoteRequest) -> AppResult<Value>;
}
