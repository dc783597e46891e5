use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use common::types::{Deleted, Updated};
use models::{Column, ColumnPatch, NewColumn};
use service::UpdateOutcome;

use crate::{errors::JsonApiError, routes::AppState};

#[utoipa::path(
    get, path = "/api/columns", tag = "columns",
    responses((status = 200, description = "All columns ordered by position", body = [crate::openapi::ColumnDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Column>>, JsonApiError> {
    Ok(Json(state.board.list_columns().await?))
}

#[utoipa::path(
    post, path = "/api/columns", tag = "columns",
    request_body = crate::openapi::NewColumnDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ColumnDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewColumn>, JsonRejection>,
) -> Result<Json<Column>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.board.create_column(input).await?))
}

#[utoipa::path(
    patch, path = "/api/columns/{id}", tag = "columns",
    params(("id" = String, Path, description = "Column id")),
    request_body = crate::openapi::ColumnPatchDoc,
    responses(
        (status = 200, description = "Updated column, or {updated: false} for an empty patch", body = crate::openapi::ColumnDoc),
        (status = 400, description = "Invalid column id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Column not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ColumnPatch>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let Json(patch) = payload?;
    match state.board.update_column(&id, patch).await? {
        UpdateOutcome::Unchanged => Ok(Json(Updated::nothing()).into_response()),
        UpdateOutcome::Updated(column) => Ok(Json(column).into_response()),
    }
}

#[utoipa::path(
    delete, path = "/api/columns/{id}", tag = "columns",
    params(("id" = String, Path, description = "Column id")),
    responses(
        (status = 200, description = "Deleted with its tasks", body = crate::openapi::DeletedDoc),
        (status = 400, description = "Invalid column id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Column not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, JsonApiError> {
    state.board.delete_column(&id).await?;
    Ok(Json(Deleted::yes()))
}
