use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ColumnDoc {
    /// 24-character hex identifier
    pub id: String,
    pub name: String,
    pub position: i64,
}

#[derive(ToSchema)]
pub struct NewColumnDoc {
    pub name: String,
    pub position: Option<i64>,
}

#[derive(ToSchema)]
pub struct ColumnPatchDoc {
    pub name: Option<String>,
    pub position: Option<i64>,
}

#[derive(ToSchema)]
pub struct TaskDoc {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub column_id: String,
    pub position: i64,
    pub priority: String,
    pub tags: Vec<String>,
}

#[derive(ToSchema)]
pub struct NewTaskDoc {
    pub title: String,
    pub description: Option<String>,
    pub column_id: String,
    /// Appended after the last task of the column when omitted
    pub position: Option<i64>,
    /// Defaults to `normal`
    pub priority: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(ToSchema)]
pub struct TaskPatchDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Moving without `position` appends to the target column
    pub column_id: Option<String>,
    pub position: Option<i64>,
    pub priority: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(ToSchema)]
pub struct UpdatedDoc { pub updated: bool }

#[derive(ToSchema)]
pub struct DeletedDoc { pub deleted: bool }

#[derive(ToSchema)]
pub struct ErrorDoc { pub detail: String }

#[derive(ToSchema)]
pub struct DiagnosticsDoc {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::columns::list,
        crate::routes::columns::create,
        crate::routes::columns::update,
        crate::routes::columns::delete,
        crate::routes::tasks::list,
        crate::routes::tasks::create,
        crate::routes::tasks::update,
        crate::routes::tasks::delete,
        crate::routes::diagnostics::report,
    ),
    components(
        schemas(
            MessageDoc,
            ColumnDoc,
            NewColumnDoc,
            ColumnPatchDoc,
            TaskDoc,
            NewTaskDoc,
            TaskPatchDoc,
            UpdatedDoc,
            DeletedDoc,
            ErrorDoc,
            DiagnosticsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "columns"),
        (name = "tasks")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
