//! Book store

use std::sync::RwLock;

use super::{read, write};
use crate::models::Livro;

#[derive(Debug, Default)]
pub struct LivroStore {
    livros: RwLock<Vec<Livro>>,
}

impl LivroStore {
    /// Replace the whole cached collection
    pub fn set_livros(&self, livros: Vec<Livro>) {
        *write(&self.livros) = livros;
    }

    /// Append `book` as-is.
    ///
    /// Unlike [`LivroStore::upsert_livro`] this never looks for an existing entry, so
    /// hydrating the same book twice leaves two entries with that id.
    pub fn set_book(&self, id: i64, book: Livro) {
        if id != book.id {
            tracing::warn!(id, book_id = book.id, "Appending book under a different id");
        }
        write(&self.livros).push(book);
    }

    /// Replace by id, or append when the book is not cached yet
    pub fn upsert_livro(&self, book: Livro) {
        let mut livros = write(&self.livros);
        match livros.iter_mut().find(|l| l.id == book.id) {
            Some(entry) => *entry = book,
            None => livros.push(book),
        }
    }

    /// Flip the availability of a cached print-run. Returns the id of the book
    /// holding it, if cached.
    pub fn set_tiragem_disponivel(&self, tiragem: i64, disponivel: bool) -> Option<i64> {
        let mut livros = write(&self.livros);
        livros.iter_mut().find_map(|livro| {
            let entry = livro.tiragens.iter_mut().find(|t| t.id == tiragem)?;
            entry.disponivel = disponivel;
            Some(livro.id)
        })
    }

    /// First cached entry with this id
    pub fn get_livro_by_id(&self, id: i64) -> Option<Livro> {
        read(&self.livros).iter().find(|l| l.id == id).cloned()
    }

    pub fn get_all_livros(&self) -> Vec<Livro> {
        read(&self.livros).clone()
    }

    pub fn len(&self) -> usize {
        read(&self.livros).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
