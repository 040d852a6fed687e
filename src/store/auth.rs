//! Access/refresh token holder

use std::sync::RwLock;

use super::{read, write};
use crate::models::TokenPair;

/// Holds the token pair obtained by the last page-load exchange.
///
/// There is no refresh-on-401 flow: a stale token makes the next call fail.
#[derive(Debug, Default)]
pub struct AuthStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl AuthStore {
    pub fn set_tokens(&self, access: impl Into<String>, refresh: impl Into<String>) {
        *write(&self.tokens) = Some(TokenPair {
            access: access.into(),
            refresh: refresh.into(),
        });
    }

    pub fn clear_tokens(&self) {
        *write(&self.tokens) = None;
    }

    pub fn get_access_token(&self) -> Option<String> {
        read(&self.tokens).as_ref().map(|t| t.access.clone())
    }

    pub fn get_refresh_token(&self) -> Option<String> {
        read(&self.tokens).as_ref().map(|t| t.refresh.clone())
    }
}
