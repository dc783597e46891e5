use std::sync::Arc;

use models::{
    parse_object_id, Column, ColumnPatch, EntityKind, NewColumn, NewTask, ObjectId, Task, TaskPatch,
};
use tracing::{debug, info, instrument, warn};

use crate::board::repository::{ColumnRepository, TaskRepository};
use crate::errors::ServiceError;

/// Result of a PATCH: either nothing applicable was sent, or the re-read document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome<T> {
    Unchanged,
    Updated(T),
}

/// Application service for the board.
///
/// Every operation is one or more independent single-document store calls.
/// Nothing here locks: two concurrent appends to the same column can read
/// the same last position and both take `last + 1`.
pub struct BoardService {
    columns: Arc<dyn ColumnRepository>,
    tasks: Arc<dyn TaskRepository>,
}

fn parse_id(kind: EntityKind, raw: &str) -> Result<ObjectId, ServiceError> {
    parse_object_id(raw).map_err(|_| ServiceError::InvalidId(kind))
}

impl BoardService {
    pub fn new(columns: Arc<dyn ColumnRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { columns, tasks }
    }

    /// Use one store object for both collections.
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: ColumnRepository + TaskRepository + 'static,
    {
        Self { columns: store.clone(), tasks: store }
    }

    pub async fn list_columns(&self) -> Result<Vec<Column>, ServiceError> {
        self.columns.list().await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_column(&self, input: NewColumn) -> Result<Column, ServiceError> {
        let draft = input.into_draft()?;
        let id = self.columns.insert(draft).await?;
        let column = self
            .columns
            .find(id)
            .await?
            .ok_or(ServiceError::not_found(EntityKind::Column))?;
        info!(column_id = %column.id, position = column.position, "column created");
        Ok(column)
    }

    /// The update is unconditional; existence is checked by re-reading afterwards.
    #[instrument(skip(self, patch))]
    pub async fn update_column(
        &self,
        raw_id: &str,
        patch: ColumnPatch,
    ) -> Result<UpdateOutcome<Column>, ServiceError> {
        let id = parse_id(EntityKind::Column, raw_id)?;
        let ignored = patch.null_fields();
        if !ignored.is_empty() {
            debug!(?ignored, "null fields in column patch are not applied");
        }
        let changes = patch.into_changes()?;
        if changes.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }
        self.columns.update(id, &changes).await?;
        let column = self
            .columns
            .find(id)
            .await?
            .ok_or(ServiceError::not_found(EntityKind::Column))?;
        info!(column_id = %column.id, "column updated");
        Ok(UpdateOutcome::Updated(column))
    }

    /// Delete the column, then every task filed under its id.
    ///
    /// The two deletes are separate store calls. A failure between them
    /// leaves the tasks in place with a dangling `column_id`. The task
    /// cascade runs even when no column matched.
    #[instrument(skip(self))]
    pub async fn delete_column(&self, raw_id: &str) -> Result<(), ServiceError> {
        let id = parse_id(EntityKind::Column, raw_id)?;
        let deleted = self.columns.delete(id).await?;
        let removed_tasks = self.tasks.delete_by_column(raw_id).await?;
        if !deleted {
            if removed_tasks > 0 {
                warn!(removed_tasks, "removed tasks of a column that no longer existed");
            }
            return Err(ServiceError::not_found(EntityKind::Column));
        }
        info!(column_id = %id, removed_tasks, "column deleted");
        Ok(())
    }

    /// An empty `column_id` filter is the same as no filter.
    pub async fn list_tasks(&self, column_id: Option<&str>) -> Result<Vec<Task>, ServiceError> {
        let filter = column_id.filter(|c| !c.is_empty());
        self.tasks.list(filter).await
    }

    #[instrument(skip(self, input), fields(column_id = %input.column_id))]
    pub async fn create_task(&self, input: NewTask) -> Result<Task, ServiceError> {
        input.validate()?;
        let position = match input.position {
            Some(p) => p,
            None => self.next_position(&input.column_id).await?,
        };
        let id = self.tasks.insert(input.into_draft(position)).await?;
        let task = self
            .tasks
            .find(id)
            .await?
            .ok_or(ServiceError::not_found(EntityKind::Task))?;
        info!(task_id = %task.id, position = task.position, "task created");
        Ok(task)
    }

    /// Moving a task to another column without a position appends it there.
    #[instrument(skip(self, patch))]
    pub async fn update_task(
        &self,
        raw_id: &str,
        patch: TaskPatch,
    ) -> Result<UpdateOutcome<Task>, ServiceError> {
        let id = parse_id(EntityKind::Task, raw_id)?;
        let ignored = patch.null_fields();
        if !ignored.is_empty() {
            debug!(?ignored, "null fields in task patch are not applied");
        }
        let mut changes = patch.into_changes()?;
        if changes.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }
        if let Some(target) = changes.needs_position_in() {
            let position = self.next_position(target).await?;
            changes.position = Some(position);
        }
        self.tasks.update(id, &changes).await?;
        let task = self
            .tasks
            .find(id)
            .await?
            .ok_or(ServiceError::not_found(EntityKind::Task))?;
        info!(task_id = %task.id, column_id = %task.column_id, position = task.position, "task updated");
        Ok(UpdateOutcome::Updated(task))
    }

    #[instrument(skip(self))]
    pub async fn delete_task(&self, raw_id: &str) -> Result<(), ServiceError> {
        let id = parse_id(EntityKind::Task, raw_id)?;
        if !self.tasks.delete(id).await? {
            return Err(ServiceError::not_found(EntityKind::Task));
        }
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// One past the highest position in the column, or 0 when it has no tasks.
    pub async fn next_position(&self, column_id: &str) -> Result<i64, ServiceError> {
        match self.tasks.last_in_column(column_id).await? {
            Some(last) => last.position.checked_add(1).ok_or_else(|| {
                ServiceError::Validation(format!(
                    "column {column_id} has no position left after {}",
                    last.position
                ))
            }),
            None => Ok(0),
        }
    }
}
