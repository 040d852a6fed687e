//! Aggregate counters

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Totals computed by the remote API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Estatistica {
    pub total_alunos: u64,
    pub total_livros: u64,
    pub total_tiragens: u64,
    pub livros_disponiveis: u64,
    pub livros_emprestados: u64,
}
