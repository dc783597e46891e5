use bson::oid::ObjectId;
use bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::patch::FieldUpdate;

pub const COLLECTION: &str = "task";
pub const DEFAULT_PRIORITY: &str = "normal";

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

/// A card on the board, as returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Task {
    #[serde(serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub title: String,
    pub description: Option<String>,
    pub column_id: String,
    pub position: i64,
    pub priority: String,
    pub tags: Vec<String>,
}

/// Stored shape of a task. `column_id` is a plain string, not a reference the
/// store enforces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub column_id: String,
    #[serde(default)]
    pub position: i64,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<TaskDocument> for Task {
    fn from(d: TaskDocument) -> Self {
        Task {
            id: d.id,
            title: d.title,
            description: d.description,
            column_id: d.column_id,
            position: d.position,
            priority: d.priority,
            tags: d.tags,
        }
    }
}

/// POST body. `position` is computed by the service when absent.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub column_id: String,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// A validated task ready to insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub column_id: String,
    pub position: i64,
    pub priority: String,
    pub tags: Vec<String>,
}

impl NewTask {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_title(&self.title)
    }

    /// Finish the draft once the position is known.
    pub fn into_draft(self, position: i64) -> TaskDraft {
        TaskDraft {
            title: self.title,
            description: self.description,
            column_id: self.column_id,
            position,
            priority: self.priority.unwrap_or_else(default_priority),
            tags: self.tags.unwrap_or_default(),
        }
    }
}

/// PATCH body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: FieldUpdate<String>,
    #[serde(default)]
    pub description: FieldUpdate<String>,
    #[serde(default)]
    pub column_id: FieldUpdate<String>,
    #[serde(default)]
    pub position: FieldUpdate<i64>,
    #[serde(default)]
    pub priority: FieldUpdate<String>,
    #[serde(default)]
    pub tags: FieldUpdate<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub column_id: Option<String>,
    pub position: Option<i64>,
    pub priority: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.column_id.is_none()
            && self.position.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
    }

    /// Target column when the task moves without an explicit position.
    pub fn needs_position_in(&self) -> Option<&str> {
        match (&self.column_id, self.position) {
            (Some(column_id), None) => Some(column_id.as_str()),
            _ => None,
        }
    }

    pub fn apply_to(&self, doc: &mut TaskDocument) {
        if let Some(v) = &self.title { doc.title = v.clone(); }
        if let Some(v) = &self.description { doc.description = Some(v.clone()); }
        if let Some(v) = &self.column_id { doc.column_id = v.clone(); }
        if let Some(v) = self.position { doc.position = v; }
        if let Some(v) = &self.priority { doc.priority = v.clone(); }
        if let Some(v) = &self.tags { doc.tags = v.clone(); }
    }
}

impl TaskPatch {
    /// Names of fields sent as explicit `null`; these are not applied.
    pub fn null_fields(&self) -> Vec<&'static str> {
        [
            ("title", self.title.is_null()),
            ("description", self.description.is_null()),
            ("column_id", self.column_id.is_null()),
            ("position", self.position.is_null()),
            ("priority", self.priority.is_null()),
            ("tags", self.tags.is_null()),
        ]
        .into_iter()
        .filter_map(|(name, null)| null.then_some(name))
        .collect()
    }

    pub fn into_changes(self) -> Result<TaskChanges, ModelError> {
        if let Some(title) = self.title.as_set() {
            validate_title(title)?;
        }
        Ok(TaskChanges {
            title: self.title.into_applied(),
            description: self.description.into_applied(),
            column_id: self.column_id.into_applied(),
            position: self.position.into_applied(),
            priority: self.priority.into_applied(),
            tags: self.tags.into_applied(),
        })
    }
}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("task title must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults() {
        let n: NewTask = serde_json::from_str(r#"{"title": "Write docs", "column_id": "c1", "priority": null}"#).unwrap();
        n.validate().unwrap();
        let d = n.into_draft(4);
        assert_eq!(d.priority, "normal");
        assert!(d.tags.is_empty());
        assert_eq!(d.description, None);
        assert_eq!(d.position, 4);
    }

    #[test]
    fn move_without_position_needs_recompute() {
        let p: TaskPatch = serde_json::from_str(r#"{"column_id": "c2"}"#).unwrap();
        let c = p.into_changes().unwrap();
        assert_eq!(c.needs_position_in(), Some("c2"));

        let p: TaskPatch = serde_json::from_str(r#"{"column_id": "c2", "position": 7}"#).unwrap();
        assert_eq!(p.into_changes().unwrap().needs_position_in(), None);

        let p: TaskPatch = serde_json::from_str(r#"{"column_id": "c2", "position": null}"#).unwrap();
        assert_eq!(p.into_changes().unwrap().needs_position_in(), Some("c2"));
    }

    #[test]
    fn empty_tags_list_is_a_real_change() {
        let p: TaskPatch = serde_json::from_str(r#"{"tags": []}"#).unwrap();
        let c = p.into_changes().unwrap();
        assert!(!c.is_empty());
        assert_eq!(c.tags, Some(vec![]));
    }

    #[test]
    fn null_fields_are_reported() {
        let p: TaskPatch = serde_json::from_str(r#"{"description": null, "tags": null, "title": "x"}"#).unwrap();
        assert_eq!(p.null_fields(), vec!["description", "tags"]);
    }

    #[test]
    fn sparse_document_gets_defaults() {
        let oid = ObjectId::new();
        let doc: TaskDocument =
            bson::from_document(bson::doc! {"_id": oid, "title": "t", "column_id": "c"}).unwrap();
        assert_eq!(doc.priority, "normal");
        assert_eq!(doc.position, 0);
        assert!(doc.tags.is_empty());
        let task = Task::from(doc);
        let v = serde_json::to_value(&task).unwrap();
        assert_eq!(v["id"], oid.to_hex());
        assert!(v["description"].is_null());
    }
}
