//! Service layer for the kanban board.
//! - Repository traits separate board rules from the document store.
//! - `store` provides MongoDB and in-memory implementations.
//! - Errors are typed so the HTTP layer can map them to status codes.

pub mod errors;
pub mod board;
pub mod store;
pub mod diagnostics;
#[cfg(test)]
pub mod test_support;

pub use board::{BoardService, ColumnRepository, StoreProbe, TaskRepository, UpdateOutcome};
pub use diagnostics::{DiagnosticsReport, DiagnosticsService};
pub use errors::ServiceError;
