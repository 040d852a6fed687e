//! Aggregate counters

use axum::{extract::State, Json};

use super::AccessToken;
use crate::{error::AppResult, models::Estatistica, AppState};

#[utoipa::path(
    get,
    path = "/api/rpc/estatisticas",
    tag = "estatistica",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Totals", body = Estatistica))
)]
pub async fn get_estatistica(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
) -> AppResult<Json<Estatistica>> {
    Ok(Json(state.services.estatistica.get_estatistica(&token).await?))
}
