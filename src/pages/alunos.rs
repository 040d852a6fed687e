//! Student list (`/alunos`) and student detail (`/alunos/{id}`)

use serde::Serialize;

use super::{authenticate, Page, MSG_LOAD_FAILED};
use crate::{
    error::{AppError, AppResult},
    models::Aluno,
    views::{loan_status::loan_rows, EditView, LoanRow},
    AppState,
};

pub const MSG_ALUNO_NOT_FOUND: &str = "Aluno não encontrado.";

#[derive(Debug, Clone, Serialize)]
pub struct AlunosView {
    pub alunos: Vec<Aluno>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlunoDetailView {
    #[serde(flatten)]
    pub detalhe: EditView,
    pub emprestimos: Vec<LoanRow>,
}

pub async fn alunos(state: &AppState) -> Page<AlunosView> {
    Page::settle("alunos", MSG_LOAD_FAILED, load_alunos(state).await)
}

async fn load_alunos(state: &AppState) -> AppResult<AlunosView> {
    let token = authenticate(state).await?;
    let alunos = state.services.alunos.get_all_alunos(&token).await?;
    state.context.alunos.set_alunos(alunos.clone());
    Ok(AlunosView { alunos })
}

pub async fn aluno_detail(state: &AppState, id: i64) -> Page<AlunoDetailView> {
    Page::settle("aluno_detail", MSG_LOAD_FAILED, load_aluno(state, id).await)
}

async fn load_aluno(state: &AppState, id: i64) -> AppResult<AlunoDetailView> {
    let token = authenticate(state).await?;
    let alunos = state.services.alunos.get_all_alunos(&token).await?;
    state.context.alunos.set_alunos(alunos);

    let aluno = state
        .context
        .alunos
        .get_aluno_by_id(id)
        .ok_or_else(|| AppError::NotFound(MSG_ALUNO_NOT_FOUND.to_string()))?;
    let emprestimos = state
        .services
        .emprestimos
        .emprestimos_por_aluno(id, &token)
        .await?;

    // An open edit session keeps showing the draft across reloads
    let detalhe = match state.context.edits.get(id) {
        Some(session) => session.view(),
        None => EditView { aluno, editando: false },
    };

    Ok(AlunoDetailView { detalhe, emprestimos: loan_rows(&emprestimos, false) })
}
