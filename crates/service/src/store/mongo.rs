use async_trait::async_trait;
use bson::{doc, Document};
use configs::DatabaseConfig;
use futures::TryStreamExt;
use models::{
    column, task, Column, ColumnChanges, ColumnDocument, ColumnDraft, ObjectId, Task, TaskChanges,
    TaskDocument, TaskDraft,
};
use mongodb::{Collection, Database};

use crate::board::repository::{ColumnRepository, StoreProbe, TaskRepository};
use crate::errors::ServiceError;

/// MongoDB-backed store over the `column` and `task` collections.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
    columns: Collection<ColumnDocument>,
    tasks: Collection<TaskDocument>,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        let columns = db.collection::<ColumnDocument>(column::COLLECTION);
        let tasks = db.collection::<TaskDocument>(task::COLLECTION);
        Self { db, columns, tasks }
    }

    pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        let db = models::db::connect_with_config(cfg).await?;
        Ok(Self::new(db))
    }

    pub fn database(&self) -> &Database { &self.db }
}

fn id_filter(id: ObjectId) -> Document {
    doc! { "_id": id }
}

fn column_set(changes: &ColumnChanges) -> Document {
    let mut set = Document::new();
    if let Some(name) = &changes.name { set.insert("name", name.clone()); }
    if let Some(position) = changes.position { set.insert("position", position); }
    set
}

fn task_set(changes: &TaskChanges) -> Document {
    let mut set = Document::new();
    if let Some(v) = &changes.title { set.insert("title", v.clone()); }
    if let Some(v) = &changes.description { set.insert("description", v.clone()); }
    if let Some(v) = &changes.column_id { set.insert("column_id", v.clone()); }
    if let Some(v) = changes.position { set.insert("position", v); }
    if let Some(v) = &changes.priority { set.insert("priority", v.clone()); }
    if let Some(v) = &changes.tags { set.insert("tags", v.clone()); }
    set
}

#[async_trait]
impl ColumnRepository for MongoStore {
    async fn list(&self) -> Result<Vec<Column>, ServiceError> {
        // _id order is creation order; the position sort below is stable over it
        let docs: Vec<ColumnDocument> = self
            .columns
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;
        let mut out: Vec<Column> = docs.into_iter().map(Column::from).collect();
        out.sort_by_key(|c| c.position);
        Ok(out)
    }

    async fn insert(&self, draft: ColumnDraft) -> Result<ObjectId, ServiceError> {
        let doc = ColumnDocument { id: ObjectId::new(), name: draft.name, position: draft.position };
        self.columns.insert_one(&doc).await?;
        Ok(doc.id)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Column>, ServiceError> {
        Ok(self.columns.find_one(id_filter(id)).await?.map(Column::from))
    }

    async fn update(&self, id: ObjectId, changes: &ColumnChanges) -> Result<(), ServiceError> {
        let set = column_set(changes);
        if set.is_empty() {
            return Ok(());
        }
        self.columns.update_one(id_filter(id), doc! { "$set": set }).await?;
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError> {
        let res = self.columns.delete_one(id_filter(id)).await?;
        Ok(res.deleted_count > 0)
    }
}

#[async_trait]
impl TaskRepository for MongoStore {
    async fn list(&self, column_id: Option<&str>) -> Result<Vec<Task>, ServiceError> {
        let filter = match column_id {
            Some(c) => doc! { "column_id": c },
            None => doc! {},
        };
        let docs: Vec<TaskDocument> = self
            .tasks
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;
        let mut out: Vec<Task> = docs.into_iter().map(Task::from).collect();
        out.sort_by_key(|t| t.position);
        Ok(out)
    }

    async fn last_in_column(&self, column_id: &str) -> Result<Option<Task>, ServiceError> {
        let mut cursor = self
            .tasks
            .find(doc! { "column_id": column_id })
            .sort(doc! { "position": -1 })
            .limit(1)
            .await?;
        Ok(cursor.try_next().await?.map(Task::from))
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
        self.tasks.insert_one(&doc).await?;
        Ok(doc.id)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Task>, ServiceError> {
        Ok(self.tasks.find_one(id_filter(id)).await?.map(Task::from))
    }

    async fn update(&self, id: ObjectId, changes: &TaskChanges) -> Result<(), ServiceError> {
        let set = task_set(changes);
        if set.is_empty() {
            return Ok(());
        }
        self.tasks.update_one(id_filter(id), doc! { "$set": set }).await?;
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ServiceError> {
        let res = self.tasks.delete_one(id_filter(id)).await?;
        Ok(res.deleted_count > 0)
    }

    async fn delete_by_column(&self, column_id: &str) -> Result<u64, ServiceError> {
        let res = self.tasks.delete_many(doc! { "column_id": column_id }).await?;
        Ok(res.deleted_count)
    }
}

#[async_trait]
impl StoreProbe for MongoStore {
    fn database_name(&self) -> String { self.db.name().to_string() }

    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, ServiceError> {
        let mut names = self.db.list_collection_names().await?;
        names.truncate(limit);
        Ok(names)
    }
}
