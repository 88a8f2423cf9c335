//! Persisted Todo Session
//!
//! Owns a `TodoList` and a storage slot. Every operation that changes the
//! task list rewrites the slot in full; filter and edit-session changes do not.

use tracing::{debug, warn};

use crate::domain::{DomainResult, TaskId, VisibilityFilter};
use crate::list::{Change, TodoList};
use super::codec::{encode, load_records};
use super::storage::SlotStorage;

pub struct TodoSession<S: SlotStorage> {
    list: TodoList,
    storage: S,
    key: String,
}

impl<S: SlotStorage> TodoSession<S> {
    /// Restore the list from `key`, starting empty if the slot is missing or unreadable
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let raw = storage.read(&key).unwrap_or_else(|err| {
            warn!(error = %err, key = %key, "failed to read task slot");
            None
        });
        let list = TodoList::from_records(load_records(raw.as_deref()));
        debug!(key = %key, count = list.tasks().len(), "task list restored");
        Self { list, storage, key }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serialize the current list into the slot
    pub fn persist(&self) -> DomainResult<()> {
        let json = encode(self.list.tasks())?;
        self.storage.write(&self.key, &json)
    }

    pub fn add(&mut self, title: &str) -> TaskId {
        let id = self.list.add(title);
        self.sync(Change::Tasks);
        id
    }

    pub fn toggle(&mut self, id: TaskId) -> DomainResult<()> {
        let change = self.list.toggle(id)?;
        self.sync(change);
        Ok(())
    }

    pub fn remove(&mut self, id: TaskId) -> DomainResult<()> {
        let change = self.list.remove(id)?;
        self.sync(change);
        Ok(())
    }

    pub fn begin_edit(&mut self, id: TaskId) -> DomainResult<()> {
        let change = self.list.begin_edit(id)?;
        self.sync(change);
        Ok(())
    }

    pub fn set_draft(&mut self, draft: &str) {
        self.list.set_draft(draft);
    }

    pub fn commit_edit(&mut self) -> DomainResult<()> {
        let change = self.list.commit_edit()?;
        self.sync(change);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.list.cancel_edit();
    }

    pub fn set_filter(&mut self, filter: VisibilityFilter) {
        self.list.set_filter(filter);
    }

    pub fn toggle_all(&mut self) {
        let change = self.list.toggle_all();
        self.sync(change);
    }

    pub fn clear_completed(&mut self) {
        let change = self.list.clear_completed();
        self.sync(change);
    }

    // Write failures are logged only; the in-memory list stays authoritative.
    fn sync(&self, change: Change) {
        if change != Change::Tasks {
            return;
        }
        if let Err(err) = self.persist() {
            warn!(error = %err, key = %self.key, "failed to persist task list");
        }
    }
}
