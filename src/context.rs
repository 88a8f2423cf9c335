//! Application Context
//!
//! Persistence handle shared via Leptos Context API.

use leptos::prelude::*;
use todo_core::persistence::{encode, load_records};
use todo_core::{SlotStorage, Task, TaskRecord};

use crate::storage::LocalStorage;

/// App-wide persistence settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Storage slot holding the task list
    storage_key: StoredValue<String>,
}

impl AppContext {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: StoredValue::new(storage_key.to_string()),
        }
    }

    /// Records saved in the slot, or none if missing/unreadable
    pub fn restore(&self) -> Vec<TaskRecord> {
        self.storage_key.with_value(|key| {
            let raw = LocalStorage.read(key).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "failed to read task slot");
                None
            });
            load_records(raw.as_deref())
        })
    }

    /// Rewrite the slot with the full task list
    pub fn persist(&self, tasks: &[Task]) {
        self.storage_key.with_value(|key| {
            let result = encode(tasks).and_then(|json| LocalStorage.write(key, &json));
            match result {
                Ok(()) => tracing::debug!(count = tasks.len(), "task list saved"),
                Err(err) => tracing::warn!(error = %err, "failed to persist task list"),
            }
        });
    }
}
