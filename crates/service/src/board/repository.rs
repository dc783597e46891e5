use async_trait::async_trait;
use models::{Column, ColumnChanges, ColumnDraft, ObjectId, Task, TaskChanges, TaskDraft};

use crate::errors::ServiceError;

/// Single-document operations on the `column` collection.
#[async_trait]
pub trait ColumnRepository: Send + Sync {
    /// All columns, stable-sorted ascending by position.
    async fn list(&self) -> Result<Vec<Column>, ServiceError>;
    /// Insert and return the store-assigned id.
    async fn insert(&self, draft: ColumnDraft) -> Result<ObjectId, ServiceError>;
    async fn find(&self, id: ObjectId) -> Result<Option<Column>, ServiceError>;
    /// `$set` the given fields. Matching nothing is not an error.
    async fn update(&self, id: ObjectId, changes: &ColumnChanges) -> Result<(), ServiceError>;
    /// Returns whether a document was removed.
    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError>;
}

/// Single-document operations on the `task` collection, plus the two
/// column-scoped queries the board needs.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Tasks, optionally restricted to one `column_id`, stable-sorted ascending by position.
    async fn list(&self, column_id: Option<&str>) -> Result<Vec<Task>, ServiceError>;
    /// The task with the highest position in a column.
    async fn last_in_column(&self, column_id: &str) -> Result<Option<Task>, ServiceError>;
    async fn insert(&self, draft: TaskDraft) -> Result<ObjectId, ServiceError>;
    async fn find(&self, id: ObjectId) -> Result<Option<Task>, ServiceError>;
    async fn update(&self, id: ObjectId, changes: &TaskChanges) -> Result<(), ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError>;
    /// Remove every task whose `column_id` equals the given string.
    async fn delete_by_column(&self, column_id: &str) -> Result<u64, ServiceError>;
}

/// Connectivity introspection used by diagnostics.
#[async_trait]
pub trait StoreProbe: Send + Sync {
    fn database_name(&self) -> String;
    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, ServiceError>;
}
