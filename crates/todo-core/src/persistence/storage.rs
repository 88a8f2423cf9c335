//! Storage Slot Abstraction
//!
//! A string-keyed slot holding one string value. The browser build backs this
//! with `localStorage`; tests use `MemoryStorage`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::DomainResult;

/// Core trait for key/value slot access
pub trait SlotStorage {
    /// Read the value stored under `key`
    fn read(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// In-memory slot storage. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage with `key` pre-populated
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.slots.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of writes performed so far
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn clear(&self) {
        self.slots.borrow_mut().clear();
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> DomainResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
