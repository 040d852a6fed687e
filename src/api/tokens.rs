//! Credential exchange endpoint

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{Credentials, TokenPair},
    AppState,
};

/// Exchange credentials for a token pair. The pair is also kept in the auth store.
#[utoipa::path(
    post,
    path = "/api/rpc/tokens",
    tag = "tokens",
    request_body = Credentials,
    responses(
        (status = 200, description = "Token pair", body = TokenPair),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn get_tokens(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Json<TokenPair>> {
    let tokens = state.services.tokens.get_tokens(&credentials).await?;
    state
        .context
        .auth
        .set_tokens(tokens.access.clone(), tokens.refresh.clone());
    Ok(Json(tokens))
}
