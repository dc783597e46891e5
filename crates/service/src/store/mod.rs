//! Store implementations behind the board repository traits.
//!
//! - `mongo`: MongoDB collections `column` and `task`.
//! - `memory`: process-local vectors, for tests and throwaway runs.

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
