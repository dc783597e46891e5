//! Shared helpers for the kanban workspace: logging bootstrap and the small
//! JSON envelopes returned by several endpoints.

pub mod types;
pub mod utils;
