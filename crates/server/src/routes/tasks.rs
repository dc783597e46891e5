use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use common::types::{Deleted, Updated};
use models::{NewTask, Task, TaskPatch};
use serde::Deserialize;
use service::UpdateOutcome;

use crate::{errors::JsonApiError, routes::AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only tasks of this column; empty means all
    pub column_id: Option<String>,
}

#[utoipa::path(
    get, path = "/api/tasks", tag = "tasks",
    params(ListQuery),
    responses((status = 200, description = "Tasks ordered by position", body = [crate::openapi::TaskDoc]))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<Task>>, JsonApiError> {
    Ok(Json(state.board.list_tasks(q.column_id.as_deref()).await?))
}

#[utoipa::path(
    post, path = "/api/tasks", tag = "tasks",
    request_body = crate::openapi::NewTaskDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::TaskDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<Json<Task>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.board.create_task(input).await?))
}

#[utoipa::path(
    patch, path = "/api/tasks/{id}", tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    request_body = crate::openapi::TaskPatchDoc,
    responses(
        (status = 200, description = "Updated task, or {updated: false} for an empty patch", body = crate::openapi::TaskDoc),
        (status = 400, description = "Invalid task id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Task not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let Json(patch) = payload?;
    match state.board.update_task(&id, patch).await? {
        UpdateOutcome::Unchanged => Ok(Json(Updated::nothing()).into_response()),
        UpdateOutcome::Updated(task) => Ok(Json(task).into_response()),
    }
}

#[utoipa::path(
    delete, path = "/api/tasks/{id}", tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeletedDoc),
        (status = 400, description = "Invalid task id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Task not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, JsonApiError> {
    state.board.delete_task(&id).await?;
    Ok(Json(Deleted::yes()))
}
