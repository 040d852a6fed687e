//! Book and print-run procedures

use std::sync::Arc;

use serde_json::Value;
use validator::Validate;

use crate::{
    client::{RemoteRequest, Transport},
    error::{AppError, AppResult},
    models::{
        livro::{PutLivroResponse, TiragemResponse},
        CreateLivro, CreateTiragem, Livro, LivroResponse, LivroUpdates, Tiragem, UpdateLivro,
    },
};

use super::{decode, encode, require_token, MSG_EMPTY_UPDATES};

const EXEMPLARES: &str = "/api/v1/exemplares/";

#[derive(Clone)]
pub struct LivroService {
    transport: Arc<dyn Transport>,
}

impl LivroService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn call(&self, request: RemoteRequest, auth_token: &str) -> AppResult<Value> {
        let token = require_token(auth_token)?;
        self.transport.send(request.with_bearer(token)).await
    }

    /// Fetch one book with its print-runs
    pub async fn get_livro(&self, id: i64, auth_token: &str) -> AppResult<Livro> {
        let request = RemoteRequest::get(format!("{}{}/", EXEMPLARES, id));
        match self.call(request, auth_token).await {
            Err(e) if e.is_not_found() => Err(AppError::NotFound("Livro não encontrado.".to_string())),
            result => decode(result?),
        }
    }

    pub async fn get_todos_livros(&self, auth_token: &str) -> AppResult<Vec<Livro>> {
        decode(self.call(RemoteRequest::get(EXEMPLARES), auth_token).await?)
    }

    /// Print-runs currently available for loan.
    ///
    /// A payload that is not a list yields no entries, and entries without an `id`
    /// are dropped.
    pub async fn get_livros_disponiveis(&self, auth_token: &str) -> AppResult<Vec<Tiragem>> {
        let value = self
            .call(RemoteRequest::get("/api/v1/livros/disponiveis/"), auth_token)
            .await?;

        let Value::Array(entries) = value else {
            tracing::warn!("Available print-runs payload is not a list");
            return Ok(Vec::new());
        };

        let tiragens = entries
            .into_iter()
            .filter(|entry| entry.get("id").is_some())
            .filter_map(|entry| match serde_json::from_value::<Tiragem>(entry) {
                Ok(tiragem) => Some(tiragem),
                Err(e) => {
                    tracing::warn!("Skipping malformed print-run: {}", e);
                    None
                }
            })
            .collect();
        Ok(tiragens)
    }

    /// Books with at least one print-run on loan
    pub async fn get_livros_indisponiveis(&self, auth_token: &str) -> AppResult<Vec<Livro>> {
        decode(
            self.call(RemoteRequest::get("/api/v1/livros/indisponiveis/"), auth_token)
                .await?,
        )
    }

    pub async fn create_livro(&self, livro: &CreateLivro, auth_token: &str) -> AppResult<LivroResponse> {
        livro.validate()?;
        tracing::info!(titulo = %livro.titulo, "Creating book");
        decode(
            self.call(RemoteRequest::post(EXEMPLARES, encode(livro)?), auth_token)
                .await?,
        )
    }

    /// Replace a book's catalog fields (PUT)
    pub async fn update_livro(
        &self,
        id: i64,
        livro: &UpdateLivro,
        auth_token: &str,
    ) -> AppResult<PutLivroResponse> {
        livro.validate()?;
        tracing::info!(id, "Replacing book");
        let request = RemoteRequest::put(format!("{}{}/", EXEMPLARES, id), encode(livro)?);
        decode(self.call(request, auth_token).await?)
    }

    /// Change only the given fields of a book (PATCH)
    pub async fn patch_livro(
        &self,
        id: i64,
        updates: &LivroUpdates,
        auth_token: &str,
    ) -> AppResult<LivroResponse> {
        if updates.is_empty() {
            return Err(AppError::Validation(MSG_EMPTY_UPDATES.to_string()));
        }
        tracing::info!(id, "Patching book");
        let request = RemoteRequest::patch(format!("{}{}/", EXEMPLARES, id), encode(updates)?);
        decode(self.call(request, auth_token).await?)
    }

    /// Add a print-run to an existing book
    pub async fn create_tiragem(&self, tiragem: &CreateTiragem, auth_token: &str) -> AppResult<TiragemResponse> {
        tiragem.validate()?;
        tracing::info!(livro = tiragem.livro, isbn = %tiragem.isbn, "Creating print-run");
        decode(
            self.call(RemoteRequest::post("/api/v1/tiragem/", encode(tiragem)?), auth_token)
                .await?,
        )
    }
}
