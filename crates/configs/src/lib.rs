use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Which document store implementation backs the board.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(anyhow!("unknown store backend: {other}")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_database_name")]
    pub name: String,
    #[serde(default = "default_server_selection_timeout")]
    pub server_selection_timeout_secs: u64,
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: default_database_url(),
            name: default_database_name(),
            server_selection_timeout_secs: default_server_selection_timeout(),
            app_name: default_app_name(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8000 }
fn default_database_url() -> String { "mongodb://localhost:27017".into() }
fn default_database_name() -> String { "kanban".into() }
fn default_server_selection_timeout() -> u64 { 5 }
fn default_app_name() -> String { "kanban-api".into() }

/// Whether the two store-related variables were present in the process
/// environment. Reported verbatim by the diagnostics endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvPresence {
    pub database_url: bool,
    pub database_name: bool,
}

impl EnvPresence {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |k: &str| lookup(k).map(|v| !v.is_empty()).unwrap_or(false);
        Self { database_url: set("DATABASE_URL"), database_name: set("DATABASE_NAME") }
    }
}

/// Load `.env`, then `config.toml` (or `CONFIG_PATH`), then environment overrides.
/// A missing config file is not an error; defaults apply.
pub fn load_default() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let mut cfg = if Path::new(&path).exists() {
        load_from_file(&path)?
    } else {
        AppConfig::default()
    };
    cfg.apply_env(|k| std::env::var(k).ok())?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay environment variables on top of file/default values.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow!("PORT must be a port number, got {port:?}: {e}"))?;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(backend) = lookup("STORE_BACKEND") {
            self.database.backend = backend.parse()?;
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            self.database.url = url;
        }
        if let Some(name) = lookup("DATABASE_NAME").filter(|v| !v.trim().is_empty()) {
            self.database.name = name;
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // memory 后端不需要连接串
        if self.database.backend == StoreBackend::Mongo {
            self.database.validate()?;
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        let lower = self.url.trim().to_lowercase();
        if lower.is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
            return Err(anyhow!("database.url must start with mongodb:// or mongodb+srv://"));
        }
        if self.name.trim().is_empty() {
            return Err(anyhow!("database.name is empty; set it in config.toml or DATABASE_NAME"));
        }
        if self.server_selection_timeout_secs == 0 {
            return Err(anyhow!("database.server_selection_timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_listen_on_8000_with_local_mongo() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.database.backend, StoreBackend::Mongo);
        assert_eq!(cfg.database.name, "kanban");
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9000
            [database]
            url = "mongodb://db:27017"
            name = "fromfile"
            "#,
        )
        .unwrap();
        cfg.apply_env(lookup(&[("PORT", "8123"), ("DATABASE_NAME", "boards")])).unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.port, 8123);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.database.url, "mongodb://db:27017");
        assert_eq!(cfg.database.name, "boards");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut cfg = AppConfig::default();
        assert!(cfg.apply_env(lookup(&[("PORT", "eighty")])).is_err());
    }

    #[test]
    fn non_mongo_url_fails_validation_unless_memory_backend() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://localhost/x".into();
        assert!(cfg.normalize_and_validate().is_err());

        cfg.apply_env(lookup(&[("STORE_BACKEND", "memory")])).unwrap();
        assert!(cfg.normalize_and_validate().is_ok());
    }

    #[test]
    fn env_presence_treats_empty_as_unset() {
        let p = EnvPresence::from_lookup(lookup(&[("DATABASE_URL", "mongodb://x"), ("DATABASE_NAME", "")]));
        assert!(p.database_url);
        assert!(!p.database_name);
    }
}
