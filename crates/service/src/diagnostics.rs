//! Store connectivity report for the `/test` endpoint.
//!
//! Building the report never fails: probe errors are folded into the
//! `database` status text.

use std::sync::Arc;

use configs::EnvPresence;
use serde::Serialize;
use tracing::warn;

use crate::board::repository::StoreProbe;
use crate::errors::ServiceError;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub struct DiagnosticsService {
    probe: Arc<dyn StoreProbe>,
    env: EnvPresence,
}

fn set_or_not(present: bool) -> String {
    if present { "✅ Set".into() } else { "❌ Not Set".into() }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

impl DiagnosticsService {
    pub fn new(probe: Arc<dyn StoreProbe>, env: EnvPresence) -> Self {
        Self { probe, env }
    }

    pub async fn report(&self) -> DiagnosticsReport {
        let mut report = DiagnosticsReport {
            backend: "✅ Running".into(),
            database: "✅ Available".into(),
            database_url: set_or_not(self.env.database_url),
            database_name: set_or_not(self.env.database_name),
            connection_status: "Not Connected".into(),
            collections: Vec::new(),
        };
        match self.probe.collection_names(MAX_COLLECTIONS).await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                report.collections = names;
                report.database = "✅ Connected & Working".into();
                report.connection_status = "Connected".into();
            }
            Err(e) => {
                let msg = match e {
                    ServiceError::Store(raw) => raw,
                    other => other.to_string(),
                };
                warn!(database = %self.probe.database_name(), error = %msg, "store probe failed");
                report.database = format!("⚠️  Connected but Error: {}", truncate_chars(&msg, MAX_ERROR_CHARS));
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use async_trait::async_trait;

    struct DownProbe;

    #[async_trait]
    impl StoreProbe for DownProbe {
        fn database_name(&self) -> String { "down".into() }
        async fn collection_names(&self, _limit: usize) -> Result<Vec<String>, ServiceError> {
            Err(ServiceError::Store("server selection timeout: no available servers, tried 127.0.0.1:27017".into()))
        }
    }

    struct ManyProbe;

    #[async_trait]
    impl StoreProbe for ManyProbe {
        fn database_name(&self) -> String { "many".into() }
        async fn collection_names(&self, _limit: usize) -> Result<Vec<String>, ServiceError> {
            Ok((0..25).map(|i| format!("c{i}")).collect())
        }
    }

    #[tokio::test]
    async fn failing_probe_becomes_truncated_status() {
        let svc = DiagnosticsService::new(Arc::new(DownProbe), EnvPresence { database_url: true, database_name: false });
        let r = svc.report().await;
        assert_eq!(r.backend, "✅ Running");
        let detail = r.database.trim_start_matches("⚠️  Connected but Error: ");
        assert_eq!(detail, "server selection timeout: no available servers, tr");
        assert_eq!(detail.chars().count(), 50);
        assert_eq!(r.connection_status, "Not Connected");
        assert!(r.collections.is_empty());
        assert_eq!(r.database_url, "✅ Set");
        assert_eq!(r.database_name, "❌ Not Set");
    }

    #[tokio::test]
    async fn collections_are_capped_at_ten() {
        let svc = DiagnosticsService::new(Arc::new(ManyProbe), EnvPresence::default());
        let r = svc.report().await;
        assert_eq!(r.collections.len(), 10);
        assert_eq!(r.database, "✅ Connected & Working");
        assert_eq!(r.connection_status, "Connected");
    }

    #[tokio::test]
    async fn memory_store_reports_working() {
        let svc = DiagnosticsService::new(Arc::new(MemoryStore::new()), EnvPresence::default());
        let r = svc.report().await;
        assert_eq!(r.database, "✅ Connected & Working");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("ééééé", 3), "ééé");
    }
}
