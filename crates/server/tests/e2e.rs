use std::net::SocketAddr;

use configs::{AppConfig, StoreBackend};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

/// Serve the real router on an ephemeral port.
///
/// Uses MongoDB when `MONGODB_TEST_URL` is set (fresh database per run),
/// otherwise the in-memory store.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    match std::env::var("MONGODB_TEST_URL") {
        Ok(url) if std::env::var("SKIP_DB_TESTS").is_err() => {
            cfg.database.url = url;
            cfg.database.name = format!("kanban_e2e_{}", std::process::id());
        }
        _ => cfg.database.backend = StoreBackend::Memory,
    }
    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_board_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["message"], "Kanban API is running");

    let col: Value = c
        .post(format!("{}/api/columns", app.base_url))
        .json(&json!({"name": "Backlog"}))
        .send()
        .await?
        .json()
        .await?;
    let col_id = col["id"].as_str().unwrap_or_default().to_string();
    assert_eq!(col["position"], 0);

    let task: Value = c
        .post(format!("{}/api/tasks", app.base_url))
        .json(&json!({"title": "Ship it", "column_id": col_id, "tags": ["release"], "priority": "high"}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(task["position"], 0);
    assert_eq!(task["tags"], json!(["release"]));

    let res = c
        .patch(format!("{}/api/tasks/{}", app.base_url, task["id"].as_str().unwrap_or_default()))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"updated": false}));

    let res = c.delete(format!("{}/api/columns/{}", app.base_url, col_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let remaining: Value = c
        .get(format!("{}/api/tasks", app.base_url))
        .query(&[("column_id", col_id.as_str())])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(remaining, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_diagnostics_endpoint() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/test", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["backend"], "✅ Running");
    assert!(body["database_url"].is_string());
    assert!(body["collections"].is_array());
    Ok(())
}
