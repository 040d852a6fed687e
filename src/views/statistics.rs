//! Figures derived locally for the statistics page

use chrono::{Datelike, Months, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use super::parse_api_date;
use crate::models::{Aluno, Emprestimo, Livro};

const MONTHS_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

const TOP_TITLES: usize = 5;
const MONTH_WINDOW: u32 = 6;

/// Named count used by the charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ChartEntry {
    pub name: String,
    pub emprestimos: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoanStatistics {
    pub total_alunos: usize,
    pub total_livros: usize,
    pub total_tiragens: usize,
    pub tiragens_disponiveis: usize,
    pub emprestimos_ativos: usize,
    pub emprestimos_devolvidos: usize,
    /// Oldest month first, labelled `mmm/yy`
    pub emprestimos_por_mes: Vec<ChartEntry>,
    pub livros_mais_emprestados: Vec<ChartEntry>,
}

impl LoanStatistics {
    pub fn compute(alunos: &[Aluno], livros: &[Livro], emprestimos: &[Emprestimo], today: NaiveDate) -> Self {
        let ativos = emprestimos.iter().filter(|e| e.is_pending()).count();

        Self {
            total_alunos: alunos.len(),
            total_livros: livros.len(),
            total_tiragens: livros.iter().map(|l| l.tiragens.len()).sum(),
            tiragens_disponiveis: livros.iter().map(Livro::available_count).sum(),
            emprestimos_ativos: ativos,
            emprestimos_devolvidos: emprestimos.len() - ativos,
            emprestimos_por_mes: by_month(emprestimos, today),
            livros_mais_emprestados: top_titles(emprestimos),
        }
    }
}

fn by_month(emprestimos: &[Emprestimo], today: NaiveDate) -> Vec<ChartEntry> {
    let dates: Vec<NaiveDate> = emprestimos
        .iter()
        .filter_map(|e| parse_api_date(&e.dt_emprestimo))
        .collect();

    (0..MONTH_WINDOW)
        .rev()
        .filter_map(|back| today.checked_sub_months(Months::new(back)))
        .map(|month| ChartEntry {
            name: month_label(month),
            emprestimos: dates
                .iter()
                .filter(|d| d.year() == month.year() && d.month() == month.month())
                .count(),
        })
        .collect()
}

fn month_label(date: NaiveDate) -> String {
    format!("{}/{:02}", MONTHS_PT[date.month0() as usize], date.year().rem_euclid(100))
}

/// Most borrowed titles. Ties keep the order in which titles first appear.
fn top_titles(emprestimos: &[Emprestimo]) -> Vec<ChartEntry> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for e in emprestimos.iter().filter(|e| !e.titulo_livro.is_empty()) {
        *counts.entry(e.titulo_livro.as_str()).or_default() += 1;
    }

    let mut entries: Vec<ChartEntry> = counts
        .into_iter()
        .map(|(name, emprestimos)| ChartEntry { name: name.to_string(), emprestimos })
        .collect();
    entries.sort_by(|a, b| b.emprestimos.cmp(&a.emprestimos));
    entries.truncate(TOP_TITLES);
    entries
}
