use bson::oid::ObjectId;
use bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::patch::FieldUpdate;

pub const COLLECTION: &str = "column";

/// A lane on the board, as returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Column {
    #[serde(serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub name: String,
    pub position: i64,
}

/// Stored shape of a column. `position` may be missing on documents written
/// by other clients; it reads as 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub position: i64,
}

impl From<ColumnDocument> for Column {
    fn from(d: ColumnDocument) -> Self {
        Column { id: d.id, name: d.name, position: d.position }
    }
}

/// POST body.
#[derive(Clone, Debug, Deserialize)]
pub struct NewColumn {
    pub name: String,
    #[serde(default)]
    pub position: Option<i64>,
}

/// A validated column ready to insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDraft {
    pub name: String,
    pub position: i64,
}

impl NewColumn {
    pub fn into_draft(self) -> Result<ColumnDraft, ModelError> {
        validate_name(&self.name)?;
        Ok(ColumnDraft { name: self.name, position: self.position.unwrap_or(0) })
    }
}

/// PATCH body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ColumnPatch {
    #[serde(default)]
    pub name: FieldUpdate<String>,
    #[serde(default)]
    pub position: FieldUpdate<i64>,
}

/// Fields that will actually be written by an update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnChanges {
    pub name: Option<String>,
    pub position: Option<i64>,
}

impl ColumnChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none()
    }

    pub fn apply_to(&self, doc: &mut ColumnDocument) {
        if let Some(name) = &self.name {
            doc.name = name.clone();
        }
        if let Some(position) = self.position {
            doc.position = position;
        }
    }
}

impl ColumnPatch {
    /// Names of fields sent as explicit `null`; these are not applied.
    pub fn null_fields(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.name.is_null() { out.push("name"); }
        if self.position.is_null() { out.push("position"); }
        out
    }

    pub fn into_changes(self) -> Result<ColumnChanges, ModelError> {
        if let Some(name) = self.name.as_set() {
            validate_name(name)?;
        }
        Ok(ColumnChanges { name: self.name.into_applied(), position: self.position.into_applied() })
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("column name must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_id_as_hex_under_id() {
        let oid = ObjectId::new();
        let c = Column { id: oid, name: "Todo".into(), position: 2 };
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["id"], oid.to_hex());
        assert!(v.get("_id").is_none());
        assert_eq!(v["position"], 2);
    }

    #[test]
    fn new_column_position_defaults_to_zero() {
        let n: NewColumn = serde_json::from_str(r#"{"name": "Doing", "position": null}"#).unwrap();
        assert_eq!(n.into_draft().unwrap(), ColumnDraft { name: "Doing".into(), position: 0 });
    }

    #[test]
    fn blank_name_is_rejected() {
        let n: NewColumn = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert!(matches!(n.into_draft(), Err(ModelError::Validation(_))));
    }

    #[test]
    fn patch_with_only_nulls_is_empty() {
        let p: ColumnPatch = serde_json::from_str(r#"{"name": null, "position": null}"#).unwrap();
        assert_eq!(p.null_fields(), vec!["name", "position"]);
        assert!(p.into_changes().unwrap().is_empty());
    }

    #[test]
    fn document_without_position_reads_as_zero() {
        let oid = ObjectId::new();
        let doc: ColumnDocument = bson::from_document(bson::doc! {"_id": oid, "name": "Legacy"}).unwrap();
        assert_eq!(doc.position, 0);
    }
}
