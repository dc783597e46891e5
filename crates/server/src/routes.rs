use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch},
    Json, Router,
};
use common::types::Message;
use configs::EnvPresence;
use service::{BoardService, ColumnRepository, DiagnosticsService, StoreProbe, TaskRepository};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{observability, openapi};

pub mod columns;
pub mod diagnostics;
pub mod tasks;

/// Shared handler state. Built once at startup from an explicit store handle.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<BoardService>,
    pub diagnostics: Arc<DiagnosticsService>,
}

impl AppState {
    pub fn new(board: Arc<BoardService>, diagnostics: Arc<DiagnosticsService>) -> Self {
        Self { board, diagnostics }
    }

    /// Wire every service to one store object.
    pub fn from_store<S>(store: Arc<S>, env: EnvPresence) -> Self
    where
        S: ColumnRepository + TaskRepository + StoreProbe + 'static,
    {
        let diagnostics = DiagnosticsService::new(store.clone(), env);
        let board = BoardService::with_store(store);
        Self::new(Arc::new(board), Arc::new(diagnostics))
    }
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::MessageDoc)))]
pub async fn root() -> Json<Message> {
    Json(Message { message: "Kanban API is running" })
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let board = Router::new()
        .route("/api/columns", get(columns::list).post(columns::create))
        .route("/api/columns/:id", patch(columns::update).delete(columns::delete))
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route("/api/tasks/:id", patch(tasks::update).delete(tasks::delete));

    let public = Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics::report))
        .route("/metrics", get(observability::metrics))
        .route("/openapi.json", get(openapi::openapi_json));

    public
        .merge(board)
        .route_layer(middleware::from_fn(observability::track_requests))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
