//! Book (livro) and print-run (tiragem) models

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};
use utoipa::ToSchema;
use validator::Validate;

/// Physical, individually loanable copy of a book.
///
/// `disponivel` is owned by the remote API: it turns false while a loan without
/// return date references the copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tiragem {
    pub id: i64,
    #[serde(default)]
    pub isbn: String,
    pub livro: i64,
    pub disponivel: bool,
}

/// Catalog entry with its print-runs
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Livro {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub url: String,
    pub titulo: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub descricao: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub editora: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub autor: String,
    /// Some API versions send the year as a string
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub ano_publicacao: i32,
    #[serde(default)]
    pub total_exemplares: u32,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tiragens: Vec<Tiragem>,
}

impl Livro {
    pub fn has_available_tiragem(&self) -> bool {
        self.tiragens.iter().any(|t| t.disponivel)
    }

    pub fn first_available_tiragem(&self) -> Option<&Tiragem> {
        self.tiragens.iter().find(|t| t.disponivel)
    }

    pub fn available_count(&self) -> usize {
        self.tiragens.iter().filter(|t| t.disponivel).count()
    }
}

/// Create book request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLivro {
    #[validate(length(min = 1, message = "Informe o título"))]
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub editora: String,
    #[serde(default)]
    pub autor: String,
    pub ano_publicacao: i32,
}

/// Full replacement of a book's catalog fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateLivro {
    #[validate(length(min = 1, message = "Informe o título"))]
    pub titulo: String,
    pub descricao: String,
    pub editora: String,
    pub autor: String,
    pub ano_publicacao: i32,
}

/// Partial book update. Only the fields present are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LivroUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editora: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ano_publicacao: Option<i32>,
}

impl LivroUpdates {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// New print-run of an existing book
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTiragem {
    #[validate(length(min = 1, message = "Informe o ISBN"))]
    pub isbn: String,
    pub livro: i64,
    #[serde(default = "default_disponivel")]
    pub disponivel: bool,
}

fn default_disponivel() -> bool {
    true
}

/// Mutation answer carrying the stored book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LivroResponse {
    pub status: String,
    pub dados: Livro,
}

/// Mutation answer carrying the stored print-run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TiragemResponse {
    pub status: String,
    pub dados: Tiragem,
}

/// Answer to a full book replacement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PutLivroResponse {
    pub status: String,
    pub livro: String,
}
