//! Loan procedures

use std::sync::Arc;

use serde_json::{json, Value};

use crate::{
    client::{RemoteRequest, Transport},
    error::{AppError, AppResult},
    models::{DevolucaoResponse, Emprestimo, EmprestimoResponse, NovoEmprestimo},
};

use super::{decode, encode, require_token, RetryPolicy};

#[derive(Clone)]
pub struct EmprestimoService {
    transport: Arc<dyn Transport>,
    retry: RetryPolicy,
}

impl EmprestimoService {
    pub fn new(transport: Arc<dyn Transport>, retry: RetryPolicy) -> Self {
        Self { transport, retry }
    }

    /// Loan lookups are the only calls retried on server/network failures.
    async fn lookup(&self, name: &str, request: RemoteRequest) -> AppResult<Value> {
        self.retry
            .run(name, || {
                let transport = Arc::clone(&self.transport);
                let request = request.clone();
                async move { transport.send(request).await }
            })
            .await
    }

    /// Register a loan. The remote API refuses print-runs that are not available.
    pub async fn emprestimo(&self, emprestimo: &NovoEmprestimo, auth_token: &str) -> AppResult<EmprestimoResponse> {
        let token = require_token(auth_token)?;
        tracing::info!(
            aluno = emprestimo.aluno,
            tiragem = emprestimo.tiragem,
            "Registering loan"
        );
        let request = RemoteRequest::post("/emprestimos/", encode(emprestimo)?).with_bearer(token);
        decode(self.transport.send(request).await?)
    }

    /// Mark the pending loan `id` as returned. The loan must exist, so a 404 is a
    /// hard failure here.
    pub async fn devolucao(&self, id: i64, auth_token: &str) -> AppResult<DevolucaoResponse> {
        let token = require_token(auth_token)?;
        tracing::info!(id, "Registering return");
        let request =
            RemoteRequest::patch(format!("/devolucao/{}/registrar/", id), json!({ "id": id })).with_bearer(token);

        match self.transport.send(request).await {
            Ok(value) => decode(value),
            Err(e) if e.is_not_found() => Err(AppError::NotFound("Empréstimo não encontrado".to_string())),
            Err(e) => Err(e),
        }
    }

    pub async fn todos_os_emprestimos(&self, auth_token: &str) -> AppResult<Vec<Emprestimo>> {
        let token = require_token(auth_token)?;
        let request = RemoteRequest::get("/emprestimos/").with_bearer(token);
        decode(self.lookup("todos_os_emprestimos", request).await?)
    }

    /// Loans of one student. The remote API answers 404 when the student has none;
    /// that is reported as an empty list.
    pub async fn emprestimos_por_aluno(&self, aluno: i64, auth_token: &str) -> AppResult<Vec<Emprestimo>> {
        let token = require_token(auth_token)?;
        let request = RemoteRequest::get(format!("/aluno/{}/emprestimos/", aluno)).with_bearer(token);

        match self.lookup("emprestimos_por_aluno", request).await {
            Ok(value) => decode(value),
            Err(e) if e.is_not_found() => {
                tracing::debug!(aluno, "No loans for student");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
