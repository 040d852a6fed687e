//! Credential exchange

use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::{
    client::{RemoteRequest, Transport},
    error::AppResult,
    models::{Credentials, TokenPair},
};

use super::decode;

#[derive(Clone)]
pub struct TokenService {
    transport: Arc<dyn Transport>,
    token_url: String,
}

impl TokenService {
    pub fn new(transport: Arc<dyn Transport>, token_url: String) -> Self {
        Self {
            transport,
            token_url,
        }
    }

    /// Exchange credentials for an access/refresh pair. Invalid credentials
    /// surface as the remote HTTP error.
    pub async fn get_tokens(&self, credentials: &Credentials) -> AppResult<TokenPair> {
        credentials.validate()?;
        tracing::debug!(username = %credentials.username, "Requesting tokens");

        let request = RemoteRequest::post(
            self.token_url.as_str(),
            json!({
                "username": credentials.username,
                "password": credentials.password,
            }),
        );
        decode(self.transport.send(request).await?)
    }
}
