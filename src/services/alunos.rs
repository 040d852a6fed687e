//! Student procedures

use std::sync::Arc;

use validator::Validate;

use crate::{
    client::{RemoteRequest, Transport},
    error::{AppError, AppResult},
    models::{Aluno, AlunoResponse, AlunoUpdates, CreateAluno},
};

use super::{decode, encode, require_token, MSG_EMPTY_UPDATES};

#[derive(Clone)]
pub struct AlunoService {
    transport: Arc<dyn Transport>,
}

impl AlunoService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List every student
    pub async fn get_all_alunos(&self, auth_token: &str) -> AppResult<Vec<Aluno>> {
        let token = require_token(auth_token)?;
        let request = RemoteRequest::get("/alunos/").with_bearer(token);
        decode(self.transport.send(request).await?)
    }

    /// Register a new student
    pub async fn create_aluno(&self, aluno: &CreateAluno, auth_token: &str) -> AppResult<AlunoResponse> {
        aluno.validate()?;
        let token = require_token(auth_token)?;

        tracing::info!(cpf = %aluno.cpf, "Creating student");
        let request = RemoteRequest::post("/alunos/", encode(aluno)?).with_bearer(token);
        decode(self.transport.send(request).await?)
    }

    /// Replace a student's fields (PUT)
    pub async fn edit_aluno(
        &self,
        id: i64,
        auth_token: &str,
        updates: &AlunoUpdates,
    ) -> AppResult<AlunoResponse> {
        check_updates(updates)?;
        let token = require_token(auth_token)?;

        tracing::info!(id, "Replacing student");
        let request = RemoteRequest::put(format!("/alunos/{}/", id), encode(updates)?).with_bearer(token);
        decode(self.transport.send(request).await?)
    }

    /// Change only the given fields of a student (PATCH)
    pub async fn edit_a_field_of_aluno(
        &self,
        id: i64,
        auth_token: &str,
        updates: &AlunoUpdates,
    ) -> AppResult<AlunoResponse> {
        check_updates(updates)?;
        let token = require_token(auth_token)?;

        tracing::info!(id, "Patching student");
        let request = RemoteRequest::patch(format!("/alunos/{}/", id), encode(updates)?).with_bearer(token);
        decode(self.transport.send(request).await?)
    }
}

fn check_updates(updates: &AlunoUpdates) -> AppResult<()> {
    if updates.is_empty() {
        return Err(AppError::Validation(MSG_EMPTY_UPDATES.to_string()));
    }
    updates.validate()?;
    Ok(())
}
