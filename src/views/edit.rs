//! Edit mode of the student detail view
//!
//! A session keeps the last saved record apart from the draft being typed, so
//! cancelling restores exactly what was shown before and saving sends only the
//! fields that differ.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Aluno, AlunoUpdates},
};

pub const MSG_NOT_EDITING: &str = "Edição não iniciada";

/// Editable student field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlunoField {
    Cpf,
    Nome,
    Sobrenome,
    Nascimento,
    Email,
    Tel1,
    Tel2,
    Endereco,
}

/// Student detail as rendered, with the edit flag
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EditView {
    pub aluno: Aluno,
    pub editando: bool,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    saved: Aluno,
    draft: Option<Aluno>,
}

impl EditSession {
    pub fn new(aluno: Aluno) -> Self {
        Self { saved: aluno, draft: None }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Start editing from the last saved values
    pub fn enter(&mut self) {
        self.draft = Some(self.saved.clone());
    }

    pub fn set_field(&mut self, field: AlunoField, value: &str) -> AppResult<()> {
        let draft = self
            .draft
            .as_mut()
            .ok_or_else(|| AppError::Validation(MSG_NOT_EDITING.to_string()))?;

        let value = value.to_string();
        match field {
            AlunoField::Cpf => draft.cpf = value,
            AlunoField::Nome => draft.nome = value,
            AlunoField::Sobrenome => draft.sobrenome = value,
            AlunoField::Email => draft.email = value,
            AlunoField::Tel1 => draft.tel1 = value,
            AlunoField::Tel2 => draft.tel2 = value,
            AlunoField::Endereco => draft.endereco = value,
            AlunoField::Nascimento => {
                draft.nascimento = if value.trim().is_empty() {
                    None
                } else {
                    Some(
                        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                            .map_err(|_| AppError::Validation("Data de nascimento inválida".to_string()))?,
                    )
                };
            }
        }
        Ok(())
    }

    /// Leave edit mode, dropping the draft
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Record shown to the user: the draft while editing, the saved values otherwise
    pub fn displayed(&self) -> &Aluno {
        self.draft.as_ref().unwrap_or(&self.saved)
    }

    pub fn view(&self) -> EditView {
        EditView { aluno: self.displayed().clone(), editando: self.is_editing() }
    }

    /// Fields of the draft that differ from the saved record
    pub fn changes(&self) -> AlunoUpdates {
        let Some(draft) = &self.draft else {
            return AlunoUpdates::default();
        };
        let saved = &self.saved;
        let changed = |new: &String, old: &String| (new != old).then(|| new.clone());

        AlunoUpdates {
            cpf: changed(&draft.cpf, &saved.cpf),
            nome: changed(&draft.nome, &saved.nome),
            sobrenome: changed(&draft.sobrenome, &saved.sobrenome),
            // A cleared birth date cannot be expressed as a partial update
            nascimento: draft.nascimento.filter(|d| saved.nascimento != Some(*d)),
            email: changed(&draft.email, &saved.email),
            tel1: changed(&draft.tel1, &saved.tel1),
            tel2: changed(&draft.tel2, &saved.tel2),
            endereco: changed(&draft.endereco, &saved.endereco),
        }
    }
}

/// Open edit sessions by student id
#[derive(Debug, Default)]
pub struct EditSessions {
    sessions: RwLock<HashMap<i64, EditSession>>,
}

impl EditSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter edit mode for `aluno`, replacing any previous draft
    pub fn enter(&self, aluno: Aluno) -> EditSession {
        let mut session = EditSession::new(aluno);
        session.enter();
        self.write().insert(session.saved.id, session.clone());
        session
    }

    pub fn get(&self, id: i64) -> Option<EditSession> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn set_field(&self, id: i64, field: AlunoField, value: &str) -> AppResult<EditSession> {
        let mut sessions = self.write();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::Validation(MSG_NOT_EDITING.to_string()))?;
        session.set_field(field, value)?;
        Ok(session.clone())
    }

    /// Drop the session and return the record it restores
    pub fn cancel(&self, id: i64) -> Option<Aluno> {
        self.write().remove(&id).map(|mut session| {
            session.cancel();
            session.saved
        })
    }

    /// Leave edit mode after a successful save
    pub fn close(&self, id: i64) -> bool {
        self.write().remove(&id).is_some()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<i64, EditSession>> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }
}
