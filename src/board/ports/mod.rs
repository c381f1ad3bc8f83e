//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod key_value;

pub use key_value::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};
