//! Loan procedures and the loan registration form

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::{settle, AccessToken, DevolucaoOutcome, EmprestimoOutcome, MutationOutcome};
use crate::{
    error::AppResult,
    models::{DevolucaoResponse, Emprestimo, EmprestimoResponse, NovoEmprestimo},
    views::{display_date, LoanForm, LoanFormView},
    AppState,
};

/// Loan picked through the form: the print-run is chosen from the book
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterLoanRequest {
    pub aluno: i64,
    pub livro: i64,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LoanFormQuery {
    /// Filter on student name or CPF
    #[serde(default)]
    pub busca_aluno: String,
    /// Filter on book title or author
    #[serde(default)]
    pub busca_livro: String,
}

fn loan_registered(response: &EmprestimoResponse) -> String {
    format!("Empréstimo registrado com sucesso! ID: {}", response.id)
}

#[utoipa::path(
    get,
    path = "/api/rpc/emprestimos",
    tag = "emprestimos",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All loans", body = Vec<Emprestimo>))
)]
pub async fn todos_os_emprestimos(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
) -> AppResult<Json<Vec<Emprestimo>>> {
    Ok(Json(state.services.emprestimos.todos_os_emprestimos(&token).await?))
}

/// Loans of one student, empty when the student has none
#[utoipa::path(
    get,
    path = "/api/rpc/alunos/{id}/emprestimos",
    tag = "emprestimos",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Student ID")),
    responses((status = 200, description = "Loans of the student", body = Vec<Emprestimo>))
)]
pub async fn emprestimos_por_aluno(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(aluno): Path<i64>,
) -> AppResult<Json<Vec<Emprestimo>>> {
    Ok(Json(
        state
            .services
            .emprestimos
            .emprestimos_por_aluno(aluno, &token)
            .await?,
    ))
}

/// Register a loan of a given print-run
#[utoipa::path(
    post,
    path = "/api/rpc/emprestimos",
    tag = "emprestimos",
    security(("bearer_auth" = [])),
    request_body = NovoEmprestimo,
    responses(
        (status = 200, description = "Loan registered", body = EmprestimoOutcome),
        (status = 400, description = "Print-run not available")
    )
)]
pub async fn emprestimo(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Json(novo): Json<NovoEmprestimo>,
) -> AppResult<Json<MutationOutcome<EmprestimoResponse>>> {
    let result = state.services.emprestimos.emprestimo(&novo, &token).await;
    if result.is_ok() {
        state.context.livros.set_tiragem_disponivel(novo.tiragem, false);
    }
    settle(&state, result, loan_registered, "Erro ao registrar empréstimo")
}

/// Mark a loan as returned
#[utoipa::path(
    patch,
    path = "/api/rpc/emprestimos/{id}/devolucao",
    tag = "emprestimos",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Return registered", body = DevolucaoOutcome),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn devolucao(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(id): Path<i64>,
) -> AppResult<Json<MutationOutcome<DevolucaoResponse>>> {
    let result = state.services.emprestimos.devolucao(id, &token).await;
    if result.is_ok() {
        refresh_livros(&state, &token).await;
    }
    settle(
        &state,
        result,
        |r| format!("Devolução registrada com sucesso em {}", display_date(&r.data_devolucao)),
        "Erro ao registrar devolução",
    )
}

/// Reload the cached books after a return, which makes a print-run available again
/// on the remote side. A failed reload keeps the previous cache.
async fn refresh_livros(state: &AppState, token: &str) {
    match state.services.livros.get_todos_livros(token).await {
        Ok(livros) => state.context.livros.set_livros(livros),
        Err(e) => tracing::warn!(error = %e, "Could not reload books after return"),
    }
}

/// Registration form built from the cached students and books
#[utoipa::path(
    get,
    path = "/api/emprestimos/formulario",
    tag = "views",
    params(LoanFormQuery),
    responses((status = 200, description = "Form state", body = LoanFormView))
)]
pub async fn loan_form(
    State(state): State<AppState>,
    Query(query): Query<LoanFormQuery>,
) -> Json<LoanFormView> {
    let form = LoanForm::new(
        state.context.alunos.get_all_alunos(),
        state.context.livros.get_all_livros(),
    );
    Json(form.view(&query.busca_aluno, &query.busca_livro))
}

/// Register a loan picked in the form, using the book's first available print-run
#[utoipa::path(
    post,
    path = "/api/emprestimos/registrar",
    tag = "views",
    security(("bearer_auth" = [])),
    request_body = RegisterLoanRequest,
    responses(
        (status = 200, description = "Loan registered", body = EmprestimoOutcome),
        (status = 400, description = "Missing selection or no available print-run")
    )
)]
pub async fn register_loan(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Json(request): Json<RegisterLoanRequest>,
) -> AppResult<Json<MutationOutcome<EmprestimoResponse>>> {
    let result = register(&state, &request, &token).await;
    settle(&state, result, loan_registered, "Erro ao registrar empréstimo")
}

async fn register(state: &AppState, request: &RegisterLoanRequest, token: &str) -> AppResult<EmprestimoResponse> {
    let mut form = LoanForm::new(
        state.context.alunos.get_all_alunos(),
        state.context.livros.get_all_livros(),
    );
    form.select_aluno(request.aluno)?;
    form.select_livro(request.livro)?;
    let novo = form.submission(Utc::now().date_naive())?;

    let response = state.services.emprestimos.emprestimo(&novo, token).await?;
    state.context.livros.set_tiragem_disponivel(novo.tiragem, false);
    Ok(response)
}
