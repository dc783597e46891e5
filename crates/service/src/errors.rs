use models::{errors::ModelError, EntityKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid {0} id")]
    InvalidId(EntityKind),
    #[error("{} not found", .0.title())]
    NotFound(EntityKind),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn not_found(kind: EntityKind) -> Self { Self::NotFound(kind) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<mongodb::error::Error> for ServiceError {
    fn from(e: mongodb::error::Error) -> Self { Self::Store(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_http_contract() {
        assert_eq!(ServiceError::InvalidId(EntityKind::Column).to_string(), "Invalid column id");
        assert_eq!(ServiceError::InvalidId(EntityKind::Task).to_string(), "Invalid task id");
        assert_eq!(ServiceError::not_found(EntityKind::Column).to_string(), "Column not found");
        assert_eq!(ServiceError::not_found(EntityKind::Task).to_string(), "Task not found");
    }
}
