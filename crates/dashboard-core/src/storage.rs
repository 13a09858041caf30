//! Flag Storage Seam
//!
//! Key-value persistence for the authentication flag. Async so a backend
//! that is itself asynchronous can sit behind it.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::StorageError;

#[async_trait(?Send)]
pub trait FlagStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory test double for `FlagStore`
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[async_trait(?Send)]
impl FlagStore for MemoryFlagStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
