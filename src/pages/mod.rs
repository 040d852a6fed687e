//! Page orchestrators
//!
//! Every page load exchanges the configured credentials for a token pair, keeps it
//! in the auth store, fetches what the page shows, hydrates the entity stores and
//! builds the view model. A failed load never escapes the page: it becomes
//! [`Page::Failed`] with a generic message.

pub mod alunos;
pub mod catalog;
pub mod emprestimos;
pub mod estatistica;

use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::Credentials,
    AppState,
};

pub const MSG_LOAD_FAILED: &str = "Erro ao carregar os dados. Por favor, tente novamente.";

/// Outcome of a page load
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Page<T> {
    Ready(T),
    NotFound { message: String },
    Failed { message: String },
}

impl<T> Page<T> {
    /// Fold a load result into a page. Missing root entities become `NotFound`,
    /// anything else is logged and replaced by `fallback`.
    pub fn settle(page: &str, fallback: &str, result: AppResult<T>) -> Self {
        match result {
            Ok(view) => Page::Ready(view),
            Err(AppError::NotFound(message)) => {
                tracing::info!(page, "{}", message);
                Page::NotFound { message }
            }
            Err(e) => {
                tracing::error!(page, error = %e, "Page load failed");
                Page::Failed { message: fallback.to_string() }
            }
        }
    }
}

/// Demo account from the configuration
pub fn configured_credentials(state: &AppState) -> Credentials {
    Credentials {
        username: state.config.credentials.username.clone(),
        password: state.config.credentials.password.clone(),
    }
}

/// Exchange the configured credentials and keep the pair in the auth store
pub async fn authenticate(state: &AppState) -> AppResult<String> {
    let tokens = state
        .services
        .tokens
        .get_tokens(&configured_credentials(state))
        .await?;
    state
        .context
        .auth
        .set_tokens(tokens.access.clone(), tokens.refresh);
    Ok(tokens.access)
}
