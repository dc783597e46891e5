use axum::{extract::State, Json};
use service::DiagnosticsReport;

use crate::routes::AppState;

/// Always 200; store problems are reported inside the body.
#[utoipa::path(
    get, path = "/test", tag = "health",
    responses((status = 200, description = "Backend and store status", body = crate::openapi::DiagnosticsDoc))
)]
pub async fn report(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(state.diagnostics.report().await)
}
