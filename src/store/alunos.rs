//! Student store

use std::sync::RwLock;

use super::{read, write};
use crate::models::Aluno;

#[derive(Debug, Default)]
pub struct AlunoStore {
    alunos: RwLock<Vec<Aluno>>,
}

impl AlunoStore {
    /// Replace the whole cached collection
    pub fn set_alunos(&self, alunos: Vec<Aluno>) {
        *write(&self.alunos) = alunos;
    }

    /// Replace the entry with the same id. Returns false when no entry matched.
    pub fn edit_aluno(&self, updated: Aluno) -> bool {
        let mut alunos = write(&self.alunos);
        match alunos.iter_mut().find(|a| a.id == updated.id) {
            Some(entry) => {
                *entry = updated;
                true
            }
            None => false,
        }
    }

    /// Replace by id, or append when the student is not cached yet
    pub fn upsert_aluno(&self, aluno: Aluno) {
        let mut alunos = write(&self.alunos);
        match alunos.iter_mut().find(|a| a.id == aluno.id) {
            Some(entry) => *entry = aluno,
            None => alunos.push(aluno),
        }
    }

    pub fn get_aluno_by_id(&self, id: i64) -> Option<Aluno> {
        read(&self.alunos).iter().find(|a| a.id == id).cloned()
    }

    pub fn get_all_alunos(&self) -> Vec<Aluno> {
        read(&self.alunos).clone()
    }
}
