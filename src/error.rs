//! Error types for the Biblioteca server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const MSG_AUTHENTICATION: &str = "Erro de autenticação. Faça login novamente.";
pub const MSG_UNAVAILABLE: &str =
    "O serviço está indisponível no momento. Por favor, tente novamente.";
pub const MSG_UNEXPECTED: &str = "Ocorreu um erro inesperado. Por favor, tente novamente.";

/// Error codes returned in the JSON error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    NoSuchData = 3,
    BadValue = 4,
    RemoteFailure = 5,
    NetworkFailure = 6,
    MalformedResponse = 7,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-2xx answer from the remote library API
    #[error("Remote API returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status of the remote answer, when the error came from one
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            AppError::Remote { status, .. } => Some(*status),
            AppError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.remote_status() == Some(404)
    }

    /// Server errors and transport failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Remote { status, .. } => *status >= 500,
            AppError::Network(_) => true,
            _ => false,
        }
    }

    /// Text shown to the user in banners and fallback blocks
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Authentication(_) => MSG_AUTHENTICATION.to_string(),
            AppError::Remote { status, .. } if *status == 401 || *status == 403 => {
                MSG_AUTHENTICATION.to_string()
            }
            AppError::Remote { status, .. } if *status >= 500 => MSG_UNAVAILABLE.to_string(),
            AppError::Remote { message, .. } => format!("Erro na requisição: {}", message),
            AppError::Network(_) => MSG_UNAVAILABLE.to_string(),
            AppError::Decode(_) | AppError::Internal(_) => MSG_UNEXPECTED.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Campo inválido: {}", field),
                })
            })
            .collect();
        AppError::Validation(messages.join("; "))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            AppError::Authentication(_) => (StatusCode::UNAUTHORIZED, ErrorCode::NotAuthorized),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData),
            AppError::Remote { status, .. } => {
                let status = StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (status, ErrorCode::RemoteFailure)
            }
            AppError::Network(msg) => {
                tracing::error!("Remote API unreachable: {}", msg);
                (StatusCode::BAD_GATEWAY, ErrorCode::NetworkFailure)
            }
            AppError::Decode(msg) => {
                tracing::error!("Malformed remote response: {}", msg);
                (StatusCode::BAD_GATEWAY, ErrorCode::MalformedResponse)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure)
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message: self.user_message(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
