//! HTTP surface: page routes, RPC procedures and view actions

pub mod alunos;
pub mod banner;
pub mod emprestimos;
pub mod estatistica;
pub mod health;
pub mod livros;
pub mod openapi;
pub mod pages;
pub mod tokens;

use std::time::Duration;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        livro::{PutLivroResponse, TiragemResponse},
        AlunoResponse, DevolucaoResponse, EmprestimoResponse, LivroResponse,
    },
    views::{Banner, EditView},
    AppState,
};

/// Bearer token for the remote API.
///
/// Taken from the `Authorization` header when present, otherwise from the auth
/// store filled by the last page load. An empty token is rejected by the
/// procedures themselves.
pub struct AccessToken(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AccessToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        let token = match header {
            Some(token) => token.to_string(),
            None => state.context.auth.get_access_token().unwrap_or_default(),
        };
        Ok(AccessToken(token))
    }
}

/// Answer of a successful mutation with the banner it raised
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    AlunoOutcome = MutationOutcome<AlunoResponse>,
    EditOutcome = MutationOutcome<EditView>,
    LivroOutcome = MutationOutcome<LivroResponse>,
    PutLivroOutcome = MutationOutcome<PutLivroResponse>,
    TiragemOutcome = MutationOutcome<TiragemResponse>,
    EmprestimoOutcome = MutationOutcome<EmprestimoResponse>,
    DevolucaoOutcome = MutationOutcome<DevolucaoResponse>
)]
pub struct MutationOutcome<T> {
    pub data: T,
    pub banner: Banner,
}

/// Raise the banner for a finished mutation.
///
/// Success shows `on_success(&data)`; failure shows `failure` followed by the
/// user-facing error message, and the error is passed on.
pub(crate) fn settle<T>(
    state: &AppState,
    result: AppResult<T>,
    on_success: impl FnOnce(&T) -> String,
    failure: &str,
) -> AppResult<Json<MutationOutcome<T>>> {
    let banners = &state.config.banners;
    match result {
        Ok(data) => {
            let banner = Banner::success(on_success(&data), Duration::from_millis(banners.success_ms));
            state.context.banner.show(banner.clone());
            Ok(Json(MutationOutcome { data, banner }))
        }
        Err(e) => {
            tracing::warn!(error = %e, "{}", failure);
            let message = format!("{}: {}", failure, e.user_message());
            state
                .context
                .banner
                .show(Banner::error(message, Duration::from_millis(banners.error_ms)));
            Err(e)
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // One route per remote procedure
    let rpc = Router::new()
        .route("/tokens", post(tokens::get_tokens))
        .route("/alunos", get(alunos::get_all_alunos).post(alunos::create_aluno))
        .route("/alunos/:id", put(alunos::edit_aluno).patch(alunos::edit_a_field_of_aluno))
        .route("/alunos/:id/emprestimos", get(emprestimos::emprestimos_por_aluno))
        .route("/livros", get(livros::get_todos_livros).post(livros::create_livro))
        .route("/livros/disponiveis", get(livros::get_livros_disponiveis))
        .route("/livros/indisponiveis", get(livros::get_livros_indisponiveis))
        .route(
            "/livros/:id",
            get(livros::get_livro).put(livros::update_livro).patch(livros::patch_livro),
        )
        .route("/tiragens", post(livros::create_tiragem))
        .route("/emprestimos", get(emprestimos::todos_os_emprestimos).post(emprestimos::emprestimo))
        .route("/emprestimos/:id/devolucao", patch(emprestimos::devolucao))
        .route("/estatisticas", get(estatistica::get_estatistica));

    Router::new()
        // Pages
        .route("/", get(pages::catalog))
        .route("/alunos", get(pages::alunos))
        .route("/alunos/:id", get(pages::aluno_detail))
        .route("/emprestimos", get(pages::emprestimos))
        .route("/estatistica", get(pages::estatistica))
        .route("/:id", get(pages::livro_detail))
        // Health
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // View actions
        .route(
            "/api/alunos/:id/edicao",
            post(alunos::enter_edit)
                .put(alunos::set_edit_field)
                .delete(alunos::cancel_edit),
        )
        .route("/api/alunos/:id/edicao/salvar", post(alunos::save_edit))
        .route("/api/emprestimos/formulario", get(emprestimos::loan_form))
        .route("/api/emprestimos/registrar", post(emprestimos::register_loan))
        .route("/api/banner", get(banner::current_banner).delete(banner::dismiss_banner))
        .nest("/api/rpc", rpc)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
