//! Domain Layer
//!
//! Task entities, the visibility filter and the edit session.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod task;
mod filter;
mod edit;

pub use error::{DomainError, DomainResult};
pub use task::{Task, TaskId, TaskRecord};
pub use filter::VisibilityFilter;
pub use edit::EditSession;
