//! In-memory key-value store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep one handle and
/// observe what a service wrote through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let entries = HashMap::from([(key.into(), value.into())]);
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

fn lock_error(err: impl ToString) -> KeyValueStoreError {
    KeyValueStoreError::storage(std::io::Error::other(err.to_string()))
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn read(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> KeyValueStoreResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
