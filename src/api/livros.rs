//! Book and print-run procedures

use axum::{
    extract::{Path, State},
    Json,
};

use super::{settle, AccessToken, LivroOutcome, MutationOutcome, PutLivroOutcome, TiragemOutcome};
use crate::{
    error::AppResult,
    models::{
        livro::{PutLivroResponse, TiragemResponse},
        CreateLivro, CreateTiragem, Livro, LivroResponse, LivroUpdates, Tiragem, UpdateLivro,
    },
    store::EntityKey,
    AppState,
};

/// Fetch one book with its print-runs
#[utoipa::path(
    get,
    path = "/api/rpc/livros/{id}",
    tag = "livros",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book", body = Livro),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_livro(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(id): Path<i64>,
) -> AppResult<Json<Livro>> {
    Ok(Json(state.services.livros.get_livro(id, &token).await?))
}

#[utoipa::path(
    get,
    path = "/api/rpc/livros",
    tag = "livros",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All books", body = Vec<Livro>))
)]
pub async fn get_todos_livros(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
) -> AppResult<Json<Vec<Livro>>> {
    Ok(Json(state.services.livros.get_todos_livros(&token).await?))
}

/// Print-runs available for loan
#[utoipa::path(
    get,
    path = "/api/rpc/livros/disponiveis",
    tag = "livros",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Available print-runs", body = Vec<Tiragem>))
)]
pub async fn get_livros_disponiveis(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
) -> AppResult<Json<Vec<Tiragem>>> {
    Ok(Json(state.services.livros.get_livros_disponiveis(&token).await?))
}

/// Books with a print-run on loan
#[utoipa::path(
    get,
    path = "/api/rpc/livros/indisponiveis",
    tag = "livros",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Books on loan", body = Vec<Livro>))
)]
pub async fn get_livros_indisponiveis(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
) -> AppResult<Json<Vec<Livro>>> {
    Ok(Json(state.services.livros.get_livros_indisponiveis(&token).await?))
}

#[utoipa::path(
    post,
    path = "/api/rpc/livros",
    tag = "livros",
    security(("bearer_auth" = [])),
    request_body = CreateLivro,
    responses(
        (status = 200, description = "Book created", body = LivroOutcome),
        (status = 400, description = "Missing title")
    )
)]
pub async fn create_livro(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Json(livro): Json<CreateLivro>,
) -> AppResult<Json<MutationOutcome<LivroResponse>>> {
    let result = state.services.livros.create_livro(&livro, &token).await;
    if let Ok(response) = &result {
        state.context.livros.upsert_livro(response.dados.clone());
    }
    settle(
        &state,
        result,
        |r| format!("Livro \"{}\" cadastrado com sucesso!", r.dados.titulo),
        "Erro ao cadastrar livro",
    )
}

/// Replace a book's catalog fields
#[utoipa::path(
    put,
    path = "/api/rpc/livros/{id}",
    tag = "livros",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateLivro,
    responses((status = 200, description = "Book replaced", body = PutLivroOutcome))
)]
pub async fn update_livro(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(id): Path<i64>,
    Json(livro): Json<UpdateLivro>,
) -> AppResult<Json<MutationOutcome<PutLivroResponse>>> {
    let ticket = state.context.sequences.begin(EntityKey::Livro(id));
    let result = state.services.livros.update_livro(id, &livro, &token).await;

    // The answer does not carry the book, so the cached copy is patched locally
    if result.is_ok() && state.context.sequences.complete(ticket) {
        if let Some(mut cached) = state.context.livros.get_livro_by_id(id) {
            cached.titulo = livro.titulo.clone();
            cached.descricao = livro.descricao.clone();
            cached.editora = livro.editora.clone();
            cached.autor = livro.autor.clone();
            cached.ano_publicacao = livro.ano_publicacao;
            state.context.livros.upsert_livro(cached);
        }
    }
    settle(
        &state,
        result,
        |_| "Livro atualizado com sucesso!".to_string(),
        "Erro ao atualizar livro",
    )
}

/// Change only the given fields of a book
#[utoipa::path(
    patch,
    path = "/api/rpc/livros/{id}",
    tag = "livros",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    request_body = LivroUpdates,
    responses(
        (status = 200, description = "Book updated", body = LivroOutcome),
        (status = 400, description = "No field to update")
    )
)]
pub async fn patch_livro(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(id): Path<i64>,
    Json(updates): Json<LivroUpdates>,
) -> AppResult<Json<MutationOutcome<LivroResponse>>> {
    let ticket = state.context.sequences.begin(EntityKey::Livro(id));
    let result = state.services.livros.patch_livro(id, &updates, &token).await;
    if let Ok(response) = &result {
        if state.context.sequences.complete(ticket) {
            state.context.livros.upsert_livro(response.dados.clone());
        }
    }
    settle(
        &state,
        result,
        |_| "Livro atualizado com sucesso!".to_string(),
        "Erro ao atualizar livro",
    )
}

/// Add a print-run to a book
#[utoipa::path(
    post,
    path = "/api/rpc/tiragens",
    tag = "livros",
    security(("bearer_auth" = [])),
    request_body = CreateTiragem,
    responses(
        (status = 200, description = "Print-run created", body = TiragemOutcome),
        (status = 400, description = "Missing ISBN")
    )
)]
pub async fn create_tiragem(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Json(tiragem): Json<CreateTiragem>,
) -> AppResult<Json<MutationOutcome<TiragemResponse>>> {
    let result = state.services.livros.create_tiragem(&tiragem, &token).await;
    if let Ok(response) = &result {
        if let Some(mut livro) = state.context.livros.get_livro_by_id(tiragem.livro) {
            livro.tiragens.push(response.dados.clone());
            livro.total_exemplares += 1;
            state.context.livros.upsert_livro(livro);
        }
    }
    settle(
        &state,
        result,
        |r| format!("Tiragem {} cadastrada com sucesso!", r.dados.isbn),
        "Erro ao cadastrar tiragem",
    )
}
