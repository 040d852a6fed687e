//! Loan (emprestimo) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use utoipa::ToSchema;

/// Loan as listed by the remote API.
///
/// Student name and book title are denormalized by the server. Dates are kept as
/// sent (plain dates or RFC 3339 timestamps depending on the endpoint).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Emprestimo {
    pub id: i64,
    pub aluno: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub nome_aluno: String,
    pub tiragem: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub titulo_livro: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub isbn_livro: String,
    pub dt_emprestimo: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub previsao_devolucao: String,
    /// `None` while the loan is outstanding
    #[serde(default)]
    pub dt_devolucao: Option<String>,
}

impl Emprestimo {
    /// A loan stays pending until a return date is set; once set it is terminal.
    pub fn is_pending(&self) -> bool {
        self.dt_devolucao.is_none()
    }
}

/// New loan request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NovoEmprestimo {
    pub aluno: i64,
    pub tiragem: i64,
    pub dt_emprestimo: NaiveDate,
    pub dt_devolucao: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmprestimoResponse {
    pub id: i64,
    #[serde(default)]
    pub mensagem: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DevolucaoResponse {
    pub status: String,
    pub data_devolucao: String,
}
