use std::time::Duration;

use configs::DatabaseConfig;
use mongodb::{options::ClientOptions, Client, Database};
use tracing::info;

/// Build a client from config and return a handle to the board database.
///
/// The driver connects lazily; an unreachable server only surfaces on the
/// first operation, after `server_selection_timeout_secs`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<Database> {
    let mut opts = ClientOptions::parse(&cfg.url).await?;
    opts.app_name = Some(cfg.app_name.clone());
    opts.server_selection_timeout = Some(Duration::from_secs(cfg.server_selection_timeout_secs));
    let client = Client::with_options(opts)?;
    info!(database = %cfg.name, "mongodb client initialized");
    Ok(client.database(&cfg.name))
}
