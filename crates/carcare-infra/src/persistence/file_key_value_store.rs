//! File-based key-value store for notification markers

use std::cell::RefCell;
use std::path::PathBuf;

use carcare_domain::repository::KeyValueStore;
use carcare_store::NotificationMemory;
use carcare_types::{Error, Result};

/// KeyValueStore over `notifications.json`
pub struct FileKeyValueStore {
    memory: RefCell<NotificationMemory>,
}

impl FileKeyValueStore {
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            memory: RefCell::new(NotificationMemory::open(store_dir)?),
        })
    }

    /// Forget every marker whose key starts with `prefix`
    pub fn remove_prefix(&self, prefix: &str) -> Result<usize> {
        self.memory.borrow_mut().remove_prefix(prefix)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> std::result::Result<bool, Error> {
        Ok(self.memory.borrow().contains(key))
    }

    fn set(&self, key: &str) -> std::result::Result<(), Error> {
        self.memory.borrow_mut().insert(key)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> std::result::Result<bool, Error> {
        self.memory.borrow_mut().remove(key)
    }

    fn mark(&self, key: &str) -> std::result::Result<bool, Error> {
        self.memory.borrow_mut().insert(key)
    }
}
