//! Loans page (`/emprestimos`): loan table plus the registration form

use serde::Serialize;

use super::{authenticate, Page};
use crate::{
    error::AppResult,
    views::{loan_status::loan_rows, LoanForm, LoanFormView, LoanRow},
    AppState,
};

pub const MSG_LOANS_FAILED: &str = "Erro ao carregar empréstimos. Por favor, tente novamente.";

#[derive(Debug, Clone, Serialize)]
pub struct EmprestimosView {
    pub emprestimos: Vec<LoanRow>,
    pub formulario: LoanFormView,
    pub tiragens_disponiveis: usize,
}

pub async fn emprestimos(state: &AppState, only_pending: bool) -> Page<EmprestimosView> {
    Page::settle(
        "emprestimos",
        MSG_LOANS_FAILED,
        load_emprestimos(state, only_pending).await,
    )
}

async fn load_emprestimos(state: &AppState, only_pending: bool) -> AppResult<EmprestimosView> {
    let token = authenticate(state).await?;
    let services = &state.services;

    let (alunos, livros, emprestimos, disponiveis) = tokio::try_join!(
        services.alunos.get_all_alunos(&token),
        services.livros.get_todos_livros(&token),
        services.emprestimos.todos_os_emprestimos(&token),
        services.livros.get_livros_disponiveis(&token),
    )?;

    state.context.alunos.set_alunos(alunos.clone());
    state.context.livros.set_livros(livros.clone());

    Ok(EmprestimosView {
        emprestimos: loan_rows(&emprestimos, only_pending),
        formulario: LoanForm::new(alunos, livros).view("", ""),
        tiragens_disponiveis: disponiveis.len(),
    })
}
