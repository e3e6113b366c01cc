//! Session-only key-value store.

use super::{KeyValueStore, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory store; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
