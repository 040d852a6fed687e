//! Book catalog (`/`) and book detail (`/{id}`)

use serde::Serialize;

use super::{authenticate, Page, MSG_LOAD_FAILED};
use crate::{
    error::AppResult,
    models::{Livro, Tiragem},
    AppState,
};

pub const MSG_DETAIL_FAILED: &str = "Erro ao carregar os detalhes do livro. Por favor, tente novamente.";

#[derive(Debug, Clone, Serialize)]
pub struct BookSummary {
    pub id: i64,
    pub titulo: String,
    pub autor: String,
    pub editora: String,
    pub ano_publicacao: i32,
    pub total_exemplares: u32,
    pub disponiveis: usize,
}

impl From<&Livro> for BookSummary {
    fn from(livro: &Livro) -> Self {
        Self {
            id: livro.id,
            titulo: livro.titulo.clone(),
            autor: livro.autor.clone(),
            editora: livro.editora.clone(),
            ano_publicacao: livro.ano_publicacao,
            total_exemplares: livro.total_exemplares,
            disponiveis: livro.available_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub livros: Vec<BookSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LivroDetailView {
    pub livro: Livro,
    pub disponiveis: usize,
    pub tiragens: Vec<Tiragem>,
}

pub async fn catalog(state: &AppState) -> Page<CatalogView> {
    Page::settle("catalog", MSG_LOAD_FAILED, load_catalog(state).await)
}

async fn load_catalog(state: &AppState) -> AppResult<CatalogView> {
    let token = authenticate(state).await?;
    let livros = state.services.livros.get_todos_livros(&token).await?;
    let view = CatalogView { livros: livros.iter().map(BookSummary::from).collect() };
    state.context.livros.set_livros(livros);
    Ok(view)
}

pub async fn livro_detail(state: &AppState, id: i64) -> Page<LivroDetailView> {
    Page::settle("livro_detail", MSG_DETAIL_FAILED, load_livro(state, id).await)
}

async fn load_livro(state: &AppState, id: i64) -> AppResult<LivroDetailView> {
    let token = authenticate(state).await?;
    let livro = state.services.livros.get_livro(id, &token).await?;
    state.context.livros.upsert_livro(livro.clone());

    Ok(LivroDetailView {
        disponiveis: livro.available_count(),
        tiragens: livro.tiragens.clone(),
        livro,
    })
}
