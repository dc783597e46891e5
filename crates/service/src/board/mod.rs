//! Columns and tasks: repository seams and the service that applies board rules.

pub mod repository;
pub mod service;

pub use repository::{ColumnRepository, StoreProbe, TaskRepository};
pub use service::{BoardService, UpdateOutcome};
