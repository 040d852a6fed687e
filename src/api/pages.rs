//! Page routes. Each answers 200 with the page state, even when loading failed.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    pages::{
        alunos::{AlunoDetailView, AlunosView},
        catalog::{CatalogView, LivroDetailView},
        emprestimos::EmprestimosView,
        estatistica::EstatisticaView,
        Page,
    },
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EmprestimosQuery {
    /// Only loans without return date
    #[serde(default)]
    pub pendentes: bool,
}

/// Book catalog
#[utoipa::path(get, path = "/", tag = "pages", responses((status = 200, description = "Catalog page")))]
pub async fn catalog(State(state): State<AppState>) -> Json<Page<CatalogView>> {
    Json(crate::pages::catalog::catalog(&state).await)
}

/// Book detail
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "pages",
    params(("id" = i64, Path, description = "Book ID")),
    responses((status = 200, description = "Book detail page"))
)]
pub async fn livro_detail(State(state): State<AppState>, Path(id): Path<i64>) -> Json<Page<LivroDetailView>> {
    Json(crate::pages::catalog::livro_detail(&state, id).await)
}

/// Student list
#[utoipa::path(get, path = "/alunos", tag = "pages", responses((status = 200, description = "Students page")))]
pub async fn alunos(State(state): State<AppState>) -> Json<Page<AlunosView>> {
    Json(crate::pages::alunos::alunos(&state).await)
}

/// Student detail with loan history
#[utoipa::path(
    get,
    path = "/alunos/{id}",
    tag = "pages",
    params(("id" = i64, Path, description = "Student ID")),
    responses((status = 200, description = "Student detail page"))
)]
pub async fn aluno_detail(State(state): State<AppState>, Path(id): Path<i64>) -> Json<Page<AlunoDetailView>> {
    Json(crate::pages::alunos::aluno_detail(&state, id).await)
}

/// Loans and the loan registration form
#[utoipa::path(
    get,
    path = "/emprestimos",
    tag = "pages",
    params(EmprestimosQuery),
    responses((status = 200, description = "Loans page"))
)]
pub async fn emprestimos(
    State(state): State<AppState>,
    Query(query): Query<EmprestimosQuery>,
) -> Json<Page<EmprestimosView>> {
    Json(crate::pages::emprestimos::emprestimos(&state, query.pendentes).await)
}

/// Totals and loan statistics
#[utoipa::path(get, path = "/estatistica", tag = "pages", responses((status = 200, description = "Statistics page")))]
pub async fn estatistica(State(state): State<AppState>) -> Json<Page<EstatisticaView>> {
    Json(crate::pages::estatistica::estatistica(&state).await)
}
