//! Statistics page (`/estatistica`)

use chrono::Utc;
use serde::Serialize;

use super::{authenticate, Page};
use crate::{
    error::AppResult,
    models::{Estatistica, Livro},
    views::LoanStatistics,
    AppState,
};

pub const MSG_STATS_FAILED: &str = "Erro ao carregar estatísticas. Por favor, tente novamente mais tarde.";

#[derive(Debug, Clone, Serialize)]
pub struct EstatisticaView {
    /// Totals computed by the remote API
    pub totais: Estatistica,
    pub livros_indisponiveis: Vec<Livro>,
    /// Figures derived here from the full listings
    pub emprestimos: LoanStatistics,
}

pub async fn estatistica(state: &AppState) -> Page<EstatisticaView> {
    Page::settle("estatistica", MSG_STATS_FAILED, load_estatistica(state).await)
}

async fn load_estatistica(state: &AppState) -> AppResult<EstatisticaView> {
    let token = authenticate(state).await?;
    let services = &state.services;

    let (totais, indisponiveis, alunos, livros, emprestimos) = tokio::try_join!(
        services.estatistica.get_estatistica(&token),
        services.livros.get_livros_indisponiveis(&token),
        services.alunos.get_all_alunos(&token),
        services.livros.get_todos_livros(&token),
        services.emprestimos.todos_os_emprestimos(&token),
    )?;

    let derived = LoanStatistics::compute(&alunos, &livros, &emprestimos, Utc::now().date_naive());
    state.context.alunos.set_alunos(alunos);
    state.context.livros.set_livros(livros);

    Ok(EstatisticaView { totais, livros_indisponiveis: indisponiveis, emprestimos: derived })
}
