//! Durable memory of delivered overdue alerts

use carcare_types::Result;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::{load_or_default, write_json};

/// Set of marker keys, kept apart from car and service data
pub struct NotificationMemory {
    store_path: PathBuf,
    keys: BTreeSet<String>,
}

impl NotificationMemory {
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("notifications.json");
        let keys = load_or_default(&store_path)?;
        Ok(Self { store_path, keys })
    }

    fn save(&self) -> Result<()> {
        write_json(&self.store_path, &self.keys)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Insert a key, returning whether it was absent
    pub fn insert(&mut self, key: &str) -> Result<bool> {
        let inserted = self.keys.insert(key.to_string());
        if inserted {
            self.save()?;
        }
        Ok(inserted)
    }

    /// Remove a key, returning whether it was present
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        let removed = self.keys.remove(key);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Remove every key with the given prefix
    pub fn remove_prefix(&mut self, prefix: &str) -> Result<usize> {
        let before = self.keys.len();
        self.keys.retain(|k| !k.starts_with(prefix));
        let removed = before - self.keys.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
