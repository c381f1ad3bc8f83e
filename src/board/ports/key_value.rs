//! Key-value storage port backing board snapshots.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueStoreResult<T> = Result<T, KeyValueStoreError>;

/// Local string-valued key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::InvalidKey`] for keys the backend cannot
    /// represent or [`KeyValueStoreError::Storage`] on backend failure.
    fn read(&self, key: &str) -> KeyValueStoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::InvalidKey`] for keys the backend cannot
    /// represent or [`KeyValueStoreError::Storage`] on backend failure.
    fn write(&self, key: &str, value: &str) -> KeyValueStoreResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueStoreError {
    /// The key is not accepted by the backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Backend failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeyValueStoreError {
    /// Wraps a backend error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
