//! Aggregate statistics procedure

use std::sync::Arc;

use crate::{
    client::{RemoteRequest, Transport},
    error::AppResult,
    models::Estatistica,
};

use super::{decode, require_token};

#[derive(Clone)]
pub struct EstatisticaService {
    transport: Arc<dyn Transport>,
}

impl EstatisticaService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get_estatistica(&self, auth_token: &str) -> AppResult<Estatistica> {
        let token = require_token(auth_token)?;
        let request = RemoteRequest::get("/estatisticas/totais/").with_bearer(token);
        decode(self.transport.send(request).await?)
    }
}
