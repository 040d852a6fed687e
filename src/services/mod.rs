//! RPC procedures against the remote library API
//!
//! One service per entity. Each procedure validates its input, attaches the bearer
//! token and turns the answer into a typed result.

pub mod alunos;
pub mod emprestimos;
pub mod estatistica;
pub mod livros;
pub mod retry;
pub mod tokens;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    client::Transport,
    config::AppConfig,
    error::{AppError, AppResult},
};

pub use retry::RetryPolicy;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub tokens: tokens::TokenService,
    pub alunos: alunos::AlunoService,
    pub livros: livros::LivroService,
    pub emprestimos: emprestimos::EmprestimoService,
    pub estatistica: estatistica::EstatisticaService,
}

impl Services {
    /// Create all services on top of the given transport
    pub fn new(transport: Arc<dyn Transport>, config: &AppConfig) -> Self {
        let retry = RetryPolicy::new(config.retry.attempts, config.retry.delay());
        Self {
            tokens: tokens::TokenService::new(transport.clone(), config.remote_api.token_url()),
            alunos: alunos::AlunoService::new(transport.clone()),
            livros: livros::LivroService::new(transport.clone()),
            emprestimos: emprestimos::EmprestimoService::new(transport.clone(), retry),
            estatistica: estatistica::EstatisticaService::new(transport),
        }
    }
}

/// Every procedure needs a bearer token; an empty one never reaches the network.
pub(crate) fn require_token(auth_token: &str) -> AppResult<&str> {
    let token = auth_token.trim();
    if token.is_empty() {
        return Err(AppError::Authentication("Missing access token".to_string()));
    }
    Ok(token)
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> AppResult<T> {
    serde_json::from_value(value).map_err(|e| AppError::Decode(e.to_string()))
}

pub(crate) fn encode<T: Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.to_string()))
}

pub(crate) const MSG_EMPTY_UPDATES: &str = "Informe ao menos um campo para atualizar";
