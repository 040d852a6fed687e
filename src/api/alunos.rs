//! Student endpoints: remote procedures and the detail view's edit mode

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::{settle, AccessToken, AlunoOutcome, EditOutcome, MutationOutcome};
use crate::{
    error::{AppError, AppResult},
    models::{Aluno, AlunoResponse, AlunoUpdates, CreateAluno},
    pages::alunos::MSG_ALUNO_NOT_FOUND,
    store::{EntityKey, Ticket},
    views::{edit::MSG_NOT_EDITING, AlunoField, EditView},
    AppState,
};

/// Change of one field while in edit mode
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetFieldRequest {
    pub field: AlunoField,
    pub value: String,
}

/// Apply a mutation answer to the student store unless a newer one already landed
fn apply(state: &AppState, ticket: Ticket, result: &AppResult<AlunoResponse>) {
    if let Ok(response) = result {
        if state.context.sequences.complete(ticket) {
            state.context.alunos.upsert_aluno(response.dados.clone());
        }
    }
}

/// List every student
#[utoipa::path(
    get,
    path = "/api/rpc/alunos",
    tag = "alunos",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All students", body = Vec<Aluno>),
        (status = 401, description = "Missing access token")
    )
)]
pub async fn get_all_alunos(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
) -> AppResult<Json<Vec<Aluno>>> {
    let alunos = state.services.alunos.get_all_alunos(&token).await?;
    Ok(Json(alunos))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/api/rpc/alunos",
    tag = "alunos",
    security(("bearer_auth" = [])),
    request_body = CreateAluno,
    responses(
        (status = 200, description = "Student created", body = AlunoOutcome),
        (status = 400, description = "Required fields missing")
    )
)]
pub async fn create_aluno(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Json(aluno): Json<CreateAluno>,
) -> AppResult<Json<MutationOutcome<AlunoResponse>>> {
    let result = state.services.alunos.create_aluno(&aluno, &token).await;
    if let Ok(response) = &result {
        state.context.alunos.upsert_aluno(response.dados.clone());
    }
    settle(
        &state,
        result,
        |_| "Aluno cadastrado com sucesso!".to_string(),
        "Erro ao criar aluno. Tente novamente",
    )
}

/// Replace a student's fields
#[utoipa::path(
    put,
    path = "/api/rpc/alunos/{id}",
    tag = "alunos",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Student ID")),
    request_body = AlunoUpdates,
    responses(
        (status = 200, description = "Student updated", body = AlunoOutcome),
        (status = 400, description = "No field to update")
    )
)]
pub async fn edit_aluno(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(id): Path<i64>,
    Json(updates): Json<AlunoUpdates>,
) -> AppResult<Json<MutationOutcome<AlunoResponse>>> {
    let ticket = state.context.sequences.begin(EntityKey::Aluno(id));
    let result = state.services.alunos.edit_aluno(id, &token, &updates).await;
    apply(&state, ticket, &result);
    settle(
        &state,
        result,
        |_| "Alterações salvas com sucesso!".to_string(),
        "Erro ao salvar alterações",
    )
}

/// Change only the given fields of a student
#[utoipa::path(
    patch,
    path = "/api/rpc/alunos/{id}",
    tag = "alunos",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Student ID")),
    request_body = AlunoUpdates,
    responses(
        (status = 200, description = "Student updated", body = AlunoOutcome),
        (status = 400, description = "No field to update")
    )
)]
pub async fn edit_a_field_of_aluno(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(id): Path<i64>,
    Json(updates): Json<AlunoUpdates>,
) -> AppResult<Json<MutationOutcome<AlunoResponse>>> {
    let ticket = state.context.sequences.begin(EntityKey::Aluno(id));
    let result = state
        .services
        .alunos
        .edit_a_field_of_aluno(id, &token, &updates)
        .await;
    apply(&state, ticket, &result);
    settle(
        &state,
        result,
        |_| "Alterações salvas com sucesso!".to_string(),
        "Erro ao salvar alterações",
    )
}

/// Enter edit mode with the cached record
#[utoipa::path(
    post,
    path = "/api/alunos/{id}/edicao",
    tag = "views",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Edit mode entered", body = EditView),
        (status = 404, description = "Student not cached")
    )
)]
pub async fn enter_edit(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<EditView>> {
    let aluno = state
        .context
        .alunos
        .get_aluno_by_id(id)
        .ok_or_else(|| AppError::NotFound(MSG_ALUNO_NOT_FOUND.to_string()))?;
    Ok(Json(state.context.edits.enter(aluno).view()))
}

/// Type into one field of the draft
#[utoipa::path(
    put,
    path = "/api/alunos/{id}/edicao",
    tag = "views",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = SetFieldRequest,
    responses(
        (status = 200, description = "Draft updated", body = EditView),
        (status = 400, description = "Not in edit mode or invalid value")
    )
)]
pub async fn set_edit_field(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<SetFieldRequest>,
) -> AppResult<Json<EditView>> {
    let session = state
        .context
        .edits
        .set_field(id, request.field, &request.value)?;
    Ok(Json(session.view()))
}

/// Leave edit mode, restoring the saved values
#[utoipa::path(
    delete,
    path = "/api/alunos/{id}/edicao",
    tag = "views",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Edit mode left", body = EditView),
        (status = 404, description = "Student not cached")
    )
)]
pub async fn cancel_edit(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<EditView>> {
    let aluno = state
        .context
        .edits
        .cancel(id)
        .or_else(|| state.context.alunos.get_aluno_by_id(id))
        .ok_or_else(|| AppError::NotFound(MSG_ALUNO_NOT_FOUND.to_string()))?;
    Ok(Json(EditView { aluno, editando: false }))
}

/// Send the modified fields and leave edit mode
#[utoipa::path(
    post,
    path = "/api/alunos/{id}/edicao/salvar",
    tag = "views",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Changes saved", body = EditOutcome),
        (status = 400, description = "Not in edit mode or nothing changed")
    )
)]
pub async fn save_edit(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(id): Path<i64>,
) -> AppResult<Json<MutationOutcome<EditView>>> {
    let result = save(&state, id, &token).await;
    settle(
        &state,
        result,
        |_| "Alterações salvas com sucesso!".to_string(),
        "Erro ao salvar alterações",
    )
}

async fn save(state: &AppState, id: i64, token: &str) -> AppResult<EditView> {
    let session = state
        .context
        .edits
        .get(id)
        .ok_or_else(|| AppError::Validation(MSG_NOT_EDITING.to_string()))?;
    let updates = session.changes();

    let ticket = state.context.sequences.begin(EntityKey::Aluno(id));
    let response = state
        .services
        .alunos
        .edit_a_field_of_aluno(id, token, &updates)
        .await?;
    let saved = response.dados;

    if state.context.sequences.complete(ticket) && !state.context.alunos.edit_aluno(saved.clone()) {
        tracing::debug!(id, "Saved student was not cached");
    }
    state.context.edits.close(id);
    Ok(EditView { aluno: saved, editando: false })
}
