//! Loan status badges and table rows

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::{display_date, format_date_br, parse_api_date};
use crate::models::Emprestimo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    InProgress,
    /// Return date as sent, when it could be parsed
    Returned(Option<NaiveDate>),
}

impl LoanStatus {
    pub fn of(emprestimo: &Emprestimo) -> Self {
        match &emprestimo.dt_devolucao {
            None => LoanStatus::InProgress,
            Some(date) => LoanStatus::Returned(parse_api_date(date)),
        }
    }

    pub fn label(&self) -> String {
        match self {
            LoanStatus::InProgress => "Em andamento".to_string(),
            LoanStatus::Returned(Some(date)) => format!("Devolvido em {}", format_date_br(*date)),
            LoanStatus::Returned(None) => "Devolvido".to_string(),
        }
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// One line of a loan table
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LoanRow {
    pub id: i64,
    pub aluno: i64,
    pub nome_aluno: String,
    pub tiragem: i64,
    pub titulo_livro: String,
    pub isbn_livro: String,
    pub dt_emprestimo: String,
    pub previsao_devolucao: String,
    pub status: String,
    pub pendente: bool,
}

impl From<&Emprestimo> for LoanRow {
    fn from(e: &Emprestimo) -> Self {
        Self {
            id: e.id,
            aluno: e.aluno,
            nome_aluno: e.nome_aluno.clone(),
            tiragem: e.tiragem,
            titulo_livro: e.titulo_livro.clone(),
            isbn_livro: e.isbn_livro.clone(),
            dt_emprestimo: display_date(&e.dt_emprestimo),
            previsao_devolucao: display_date(&e.previsao_devolucao),
            status: LoanStatus::of(e).label(),
            pendente: e.is_pending(),
        }
    }
}

/// Table rows, optionally restricted to loans still outstanding
pub fn loan_rows(emprestimos: &[Emprestimo], only_pending: bool) -> Vec<LoanRow> {
    emprestimos
        .iter()
        .filter(|e| !only_pending || e.is_pending())
        .map(LoanRow::from)
        .collect()
}
