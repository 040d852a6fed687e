//! Banner slot endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{views::Banner, AppState};

/// Banner currently visible, or `null` once it was dismissed or expired
#[utoipa::path(
    get,
    path = "/api/banner",
    tag = "views",
    responses((status = 200, description = "Visible banner, or null", body = Banner))
)]
pub async fn current_banner(State(state): State<AppState>) -> Json<Option<Banner>> {
    Json(state.context.banner.current())
}

#[utoipa::path(
    delete,
    path = "/api/banner",
    tag = "views",
    responses((status = 204, description = "Banner dismissed"))
)]
pub async fn dismiss_banner(State(state): State<AppState>) -> StatusCode {
    state.context.banner.dismiss();
    StatusCode::NO_CONTENT
}
