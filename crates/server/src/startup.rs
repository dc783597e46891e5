use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, EnvPresence, StoreBackend};
use service::store::{MemoryStore, MongoStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AppState};

/// Any origin, method and header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the store selected by config and wire the services to it.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let env = EnvPresence::from_env();
    let state = match cfg.database.backend {
        StoreBackend::Mongo => {
            let store = Arc::new(MongoStore::connect(&cfg.database).await?);
            AppState::from_store(store, env)
        }
        StoreBackend::Memory => {
            warn!("using in-memory store; board data is lost on restart");
            AppState::from_store(Arc::new(MemoryStore::new()), env)
        }
    };
    Ok(state)
}

pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = build_state(cfg).await?;
    Ok(routes::build_router(state, build_cors()))
}

/// Load config from file/env and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, backend = ?cfg.database.backend, database = %cfg.database.name, "kanban api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("http server drained");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only by process kill");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
