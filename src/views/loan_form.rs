//! Loan registration form
//!
//! Students and books are picked from the client stores. A book can only be
//! chosen while one of its print-runs is available, and the loan is always
//! registered against the first available print-run.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::fold;
use crate::{
    error::{AppError, AppResult},
    models::{Aluno, Livro, NovoEmprestimo, Tiragem},
};

pub const MSG_SELECT_ALUNO: &str = "Selecione um aluno";
pub const MSG_SELECT_LIVRO: &str = "Selecione um livro";
pub const MSG_NO_COPIES: &str = "Sem exemplares disponíveis";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AlunoOption {
    pub id: i64,
    pub nome: String,
    pub cpf: String,
}

/// Book as listed in the form's picker
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookOption {
    pub id: i64,
    pub titulo: String,
    pub autor: String,
    pub disponiveis: usize,
    pub selectable: bool,
    pub aviso: Option<String>,
}

impl From<&Livro> for BookOption {
    fn from(livro: &Livro) -> Self {
        let disponiveis = livro.available_count();
        Self {
            id: livro.id,
            titulo: livro.titulo.clone(),
            autor: livro.autor.clone(),
            disponiveis,
            selectable: disponiveis > 0,
            aviso: (disponiveis == 0).then(|| MSG_NO_COPIES.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoanFormView {
    pub alunos: Vec<AlunoOption>,
    pub livros: Vec<BookOption>,
    pub aluno_selecionado: Option<i64>,
    pub livro_selecionado: Option<i64>,
    pub tiragem_selecionada: Option<i64>,
    pub pode_registrar: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    alunos: Vec<Aluno>,
    livros: Vec<Livro>,
    aluno: Option<i64>,
    livro: Option<i64>,
}

impl LoanForm {
    pub fn new(alunos: Vec<Aluno>, livros: Vec<Livro>) -> Self {
        Self { alunos, livros, aluno: None, livro: None }
    }

    /// Students whose name or CPF matches `query`, ignoring case and accents
    pub fn search_alunos(&self, query: &str) -> Vec<AlunoOption> {
        let needle = fold(query.trim());
        self.alunos
            .iter()
            .filter(|a| needle.is_empty() || fold(&a.nome_completo()).contains(&needle) || a.cpf.contains(&needle))
            .map(|a| AlunoOption { id: a.id, nome: a.nome_completo(), cpf: a.cpf.clone() })
            .collect()
    }

    /// Books whose title or author matches `query`
    pub fn search_livros(&self, query: &str) -> Vec<BookOption> {
        let needle = fold(query.trim());
        self.livros
            .iter()
            .filter(|l| needle.is_empty() || fold(&l.titulo).contains(&needle) || fold(&l.autor).contains(&needle))
            .map(BookOption::from)
            .collect()
    }

    pub fn select_aluno(&mut self, id: i64) -> AppResult<()> {
        if !self.alunos.iter().any(|a| a.id == id) {
            return Err(AppError::Validation(MSG_SELECT_ALUNO.to_string()));
        }
        self.aluno = Some(id);
        Ok(())
    }

    /// Pick a book. Books without an available print-run are refused.
    pub fn select_livro(&mut self, id: i64) -> AppResult<()> {
        let livro = self
            .livros
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::Validation(MSG_SELECT_LIVRO.to_string()))?;
        if !livro.has_available_tiragem() {
            return Err(AppError::Validation(MSG_NO_COPIES.to_string()));
        }
        self.livro = Some(id);
        Ok(())
    }

    pub fn selected_tiragem(&self) -> Option<&Tiragem> {
        let id = self.livro?;
        self.livros
            .iter()
            .find(|l| l.id == id)
            .and_then(Livro::first_available_tiragem)
    }

    /// Loan to register, dated `today`
    pub fn submission(&self, today: NaiveDate) -> AppResult<NovoEmprestimo> {
        let aluno = self
            .aluno
            .ok_or_else(|| AppError::Validation(MSG_SELECT_ALUNO.to_string()))?;
        if self.livro.is_none() {
            return Err(AppError::Validation(MSG_SELECT_LIVRO.to_string()));
        }
        let tiragem = self
            .selected_tiragem()
            .ok_or_else(|| AppError::Validation(MSG_NO_COPIES.to_string()))?;

        Ok(NovoEmprestimo { aluno, tiragem: tiragem.id, dt_emprestimo: today, dt_devolucao: None })
    }

    /// Clear the selections after a successful registration
    /// Form state with the pickers narrowed by the two search boxes
    pub fn view(&self, busca_aluno: &str, busca_livro: &str) -> LoanFormView {
        LoanFormView {
            alunos: self.search_alunos(busca_aluno),
            livros: self.search_livros(busca_livro),
            aluno_selecionado: self.aluno,
            livro_selecionado: self.livro,
            tiragem_selecionada: self.selected_tiragem().map(|t| t.id),
            pode_registrar: self.aluno.is_some() && self.selected_tiragem().is_some(),
        }
    }
}
