#![cfg(test)]
use std::sync::Arc;

use configs::DatabaseConfig;
use models::{NewColumn, NewTask};

use crate::board::BoardService;
use crate::store::{MemoryStore, MongoStore};

pub fn memory_board() -> (Arc<MemoryStore>, BoardService) {
    let store = Arc::new(MemoryStore::new());
    let board = BoardService::with_store(Arc::clone(&store));
    (store, board)
}

/// A board on a fresh, uniquely named MongoDB database.
///
/// Only when `MONGODB_TEST_URL` is set and `SKIP_DB_TESTS` is not.
pub async fn mongo_board() -> Option<(Arc<MongoStore>, BoardService)> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return None; }
    let url = std::env::var("MONGODB_TEST_URL").ok()?;
    let cfg = DatabaseConfig {
        url,
        name: format!("kanban_test_{}", uuid::Uuid::new_v4().simple()),
        ..Default::default()
    };
    let store = match MongoStore::connect(&cfg).await {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("skip mongo scenarios: {e}");
            return None;
        }
    };
    let board = BoardService::with_store(Arc::clone(&store));
    Some((store, board))
}

pub fn column_input(name: &str, position: Option<i64>) -> NewColumn {
    NewColumn { name: name.into(), position }
}

pub fn task_input(title: &str, column_id: &str, position: Option<i64>) -> NewTask {
    NewTask {
        title: title.into(),
        description: None,
        column_id: column_id.into(),
        position,
        priority: None,
        tags: None,
    }
}
