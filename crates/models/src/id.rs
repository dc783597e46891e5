//! Identifier handling.
//!
//! Documents are keyed by the store's native `ObjectId`. Clients only ever see
//! its 24-character hex form under the field name `id`.

use std::fmt;

use bson::oid::ObjectId;

use crate::errors::ModelError;

/// The two document kinds on the board, used to word errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Column,
    Task,
}

impl EntityKind {
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Column => "column",
            EntityKind::Task => "task",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Column => "Column",
            EntityKind::Task => "Task",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Parse a path identifier into the store's native id. No trimming: the raw
/// string must be exactly 24 hex characters.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ModelError> {
    ObjectId::parse_str(raw).map_err(|_| ModelError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_object_id() {
        let oid = ObjectId::new();
        let parsed = parse_object_id(&oid.to_hex()).unwrap();
        assert_eq!(parsed, oid);
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "123", "not-an-id", "zzzzzzzzzzzzzzzzzzzzzzzz", " 64b7f0c2a1b2c3d4e5f60718"] {
            assert!(matches!(parse_object_id(raw), Err(ModelError::InvalidId(_))), "{raw:?}");
        }
    }

    #[test]
    fn entity_kind_wording() {
        assert_eq!(EntityKind::Column.to_string(), "column");
        assert_eq!(EntityKind::Task.title(), "Task");
    }
}
