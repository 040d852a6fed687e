//! Credential exchange types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Username/password sent to the token endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Informe o usuário"))]
    pub username: String,
    #[validate(length(min = 1, message = "Informe a senha"))]
    pub password: String,
}

/// Access/refresh pair issued by the token endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}
