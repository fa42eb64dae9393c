//! Persistence Adapter
//!
//! Serializes the task list as JSON under a single key of a key-value store.
//! Callers in the UI use the best-effort variants, which never surface errors.

use crate::error::{StorageError, StorageResult};
use crate::models::TaskRecord;
use crate::task_list::TaskList;

/// String key-value store (browser local storage or an in-memory map)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let storage = web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        // Quota errors land here
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Write the whole list under `key`
pub fn save(store: &dyn KeyValueStore, key: &str, tasks: &TaskList) -> StorageResult<()> {
    let json = serde_json::to_string(&tasks.to_records())?;
    store.set(key, &json)
}

/// Read the list under `key`. A missing key is an empty list.
pub fn load(store: &dyn KeyValueStore, key: &str) -> StorageResult<TaskList> {
    match store.get(key)? {
        Some(raw) => {
            let records: Vec<TaskRecord> = serde_json::from_str(&raw)?;
            Ok(TaskList::from_records(records))
        }
        None => Ok(TaskList::new()),
    }
}

pub fn save_best_effort(store: &dyn KeyValueStore, key: &str, tasks: &TaskList) {
    match save(store, key, tasks) {
        Ok(()) => log::debug!("saved {} tasks", tasks.len()),
        Err(e) => log::warn!("save skipped: {}", e),
    }
}

pub fn load_or_empty(store: &dyn KeyValueStore, key: &str) -> TaskList {
    load(store, key).unwrap_or_else(|e| {
        log::warn!("starting empty: {}", e);
        TaskList::new()
    })
}
