//! Board document types: columns, tasks, identifiers and partial updates.

pub mod errors;
pub mod db;
pub mod id;
pub mod patch;
pub mod column;
pub mod task;

pub use column::{Column, ColumnChanges, ColumnDocument, ColumnDraft, ColumnPatch, NewColumn};
pub use id::{parse_object_id, EntityKind};
pub use patch::FieldUpdate;
pub use task::{NewTask, Task, TaskChanges, TaskDocument, TaskDraft, TaskPatch};

pub use bson::oid::ObjectId;
