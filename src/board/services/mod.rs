//! Application services for board state and persistence.

mod persistence;
mod store;

pub use persistence::{BoardPersistence, PersistenceError, SNAPSHOT_KEY};
pub use store::BoardStore;
