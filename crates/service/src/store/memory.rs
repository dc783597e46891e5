use async_trait::async_trait;
use models::{
    column, task, Column, ColumnChanges, ColumnDocument, ColumnDraft, ObjectId, Task, TaskChanges,
    TaskDocument, TaskDraft,
};
use tokio::sync::RwLock;

use crate::board::repository::{ColumnRepository, StoreProbe, TaskRepository};
use crate::errors::ServiceError;

/// In-memory document store.
///
/// Documents are kept in insertion order, which is the tie-break when two
/// documents share a position.
#[derive(Default)]
pub struct MemoryStore {
    columns: RwLock<Vec<ColumnDocument>>,
    tasks: RwLock<Vec<TaskDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl ColumnRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Column>, ServiceError> {
        let docs = self.columns.read().await;
        let mut out: Vec<Column> = docs.iter().cloned().map(Column::from).collect();
        out.sort_by_key(|c| c.position);
        Ok(out)
    }

    async fn insert(&self, draft: ColumnDraft) -> Result<ObjectId, ServiceError> {
        let doc = ColumnDocument { id: ObjectId::new(), name: draft.name, position: draft.position };
        let id = doc.id;
        self.columns.write().await.push(doc);
        Ok(id)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Column>, ServiceError> {
        let docs = self.columns.read().await;
        Ok(docs.iter().find(|d| d.id == id).cloned().map(Column::from))
    }

    async fn update(&self, id: ObjectId, changes: &ColumnChanges) -> Result<(), ServiceError> {
        let mut docs = self.columns.write().await;
        if let Some(doc) = docs.iter_mut().find(|d| d.id == id) {
            changes.apply_to(doc);
        }
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError> {
        let mut docs = self.columns.write().await;
        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok(docs.len() != before)
    }
}

#[async_trait]
impl TaskRepository for MemoryStore {
    async fn list(&self, column_id: Option<&str>) -> Result<Vec<Task>, ServiceError> {
        let docs = self.tasks.read().await;
        let mut out: Vec<Task> = docs
            .iter()
            .filter(|d| column_id.map_or(true, |c| d.column_id == c))
            .cloned()
            .map(Task::from)
            .collect();
        out.sort_by_key(|t| t.position);
        Ok(out)
    }

    async fn last_in_column(&self, column_id: &str) -> Result<Option<Task>, ServiceError> {
        let docs = self.tasks.read().await;
        Ok(docs
            .iter()
            .filter(|d| d.column_id == column_id)
            .max_by_key(|d| d.position)
            .cloned()
            .map(Task::from))
    }

    async fn insert(&self, draft: TaskDraft) -> Result<ObjectId, ServiceError> {
        let doc = TaskDocument {
            id: ObjectId::new(),
            title: draft.title,
            description: draft.description,
            column_id: draft.column_id,
            position: draft.position,
            priority: draft.priority,
            tags: draft.tags,
        };
        let id = doc.id;
        self.tasks.write().await.push(doc);
        Ok(id)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Task>, ServiceError> {
        let docs = self.tasks.read().await;
        Ok(docs.iter().find(|d| d.id == id).cloned().map(Task::from))
    }

    async fn update(&self, id: ObjectId, changes: &TaskChanges) -> Result<(), ServiceError> {
        let mut docs = self.tasks.write().await;
        if let Some(doc) = docs.iter_mut().find(|d| d.id == id) {
            changes.apply_to(doc);
        }
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError> {
        let mut docs = self.tasks.write().await;
        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok(docs.len() != before)
    }

    async fn delete_by_column(&self, column_id: &str) -> Result<u64, ServiceError> {
        let mut docs = self.tasks.write().await;
        let before = docs.len();
        docs.retain(|d| d.column_id != column_id);
        Ok((before - docs.len()) as u64)
    }
}

#[async_trait]
impl StoreProbe for MemoryStore {
    fn database_name(&self) -> String { "memory".into() }

    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, ServiceError> {
        let mut names = Vec::new();
        if !self.columns.read().await.is_empty() { names.push(column::COLLECTION.to_string()); }
        if !self.tasks.read().await.is_empty() { names.push(task::COLLECTION.to_string()); }
        names.truncate(limit);
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn last_in_column_picks_highest_position() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let repo: &dyn TaskRepository = &store;
        for (pos, col) in [(4, "a"), (9, "b"), (7, "a"), (1, "a")] {
            repo.insert(TaskDraft {
                title: format!("p{pos}"),
                description: None,
                column_id: col.into(),
                position: pos,
                priority: "normal".into(),
                tags: vec![],
            })
            .await?;
        }
        assert_eq!(repo.last_in_column("a").await?.map(|t| t.position), Some(7));
        assert_eq!(repo.last_in_column("zzz").await?, None);
        assert_eq!(repo.delete_by_column("a").await?, 3);
        assert_eq!(repo.list(None).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_silent() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let repo: &dyn ColumnRepository = &store;
        let changes = ColumnChanges { name: Some("x".into()), position: None };
        repo.update(ObjectId::new(), &changes).await?;
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn probe_lists_only_populated_collections() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        assert!(store.collection_names(10).await?.is_empty());
        ColumnRepository::insert(&store, ColumnDraft { name: "c".into(), position: 0 }).await?;
        assert_eq!(store.collection_names(10).await?, vec!["column".to_string()]);
        Ok(())
    }
}
