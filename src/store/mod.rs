//! In-memory entity stores shared by the page orchestrators and mutation handlers
//!
//! The stores are a read-through copy of what the remote API last returned; they
//! have no authority. [`AppContext`] bundles them and is handed to handlers through
//! the application state.

pub mod alunos;
pub mod auth;
pub mod livros;
pub mod sequence;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use alunos::AlunoStore;
pub use auth::AuthStore;
pub use livros::LivroStore;
pub use sequence::{EntityKey, SequenceTracker, Ticket};

use crate::views::banner::BannerSlot;
use crate::views::edit::EditSessions;

/// Everything the view layer shares between requests
#[derive(Debug, Default)]
pub struct AppContext {
    pub alunos: AlunoStore,
    pub livros: LivroStore,
    pub auth: AuthStore,
    pub sequences: SequenceTracker,
    pub banner: BannerSlot,
    pub edits: EditSessions,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }
}

// A poisoned lock only means a writer panicked mid-update of plain data.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
