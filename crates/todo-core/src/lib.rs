//! Todo Widget Core
//!
//! Platform-independent state for the todo widget:
//! - domain: task entity, visibility filter, edit session
//! - ops: pure list operations shared by every front end
//! - list: the complete widget state machine
//! - input: keyboard policy
//! - persistence: storage slot, JSON codec, persisted session

pub mod domain;
pub mod ops;
pub mod list;
pub mod input;
pub mod persistence;

pub use domain::{DomainError, DomainResult, EditSession, Task, TaskId, TaskRecord, VisibilityFilter};
pub use input::KeyIntent;
pub use list::{Change, TodoList};
pub use ops::Summary;
pub use persistence::{MemoryStorage, SlotStorage, TodoSession};

/// Storage slot used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "todos";
