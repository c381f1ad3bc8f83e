//! Snapshot persistence for the board.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{
    domain::Board,
    ports::{KeyValueStore, KeyValueStoreError},
};

/// Storage key holding the board snapshot.
pub const SNAPSHOT_KEY: &str = "todos";

/// Errors raised while saving a snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The board could not be encoded.
    #[error("failed to encode board snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    /// The store rejected the write.
    #[error(transparent)]
    Store(#[from] KeyValueStoreError),
}

/// Loads and saves the board as a single JSON snapshot.
#[derive(Debug)]
pub struct BoardPersistence<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
}

impl<S> Clone for BoardPersistence<S>
where
    S: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> BoardPersistence<S>
where
    S: KeyValueStore,
{
    /// Creates a persistence adapter over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Loads the stored board.
    ///
    /// A missing, unreadable, non-JSON or wrongly shaped snapshot yields an
    /// empty board. Task ids repeated within a snapshot are reassigned so
    /// every stored task survives.
    #[must_use]
    pub fn load(&self) -> Board {
        let raw = match self.store.read(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = SNAPSHOT_KEY, "no stored board, starting empty");
                return Board::default();
            }
            Err(err) => {
                warn!(key = SNAPSHOT_KEY, error = %err, "failed to read stored board");
                return Board::default();
            }
        };

        let board = match serde_json::from_str::<Board>(&raw) {
            Ok(board) => board,
            Err(err) => {
                warn!(key = SNAPSHOT_KEY, error = %err, "discarding malformed board snapshot");
                return Board::default();
            }
        };

        let (board, replaced) = board.with_unique_task_ids();
        if replaced > 0 {
            warn!(key = SNAPSHOT_KEY, replaced, "reassigned repeated task ids in board snapshot");
        }

        debug!(tasks = board.task_count(), "loaded board snapshot");
        board
    }

    /// Writes `board` as the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when encoding or the store write fails.
    pub fn save(&self, board: &Board) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(board)?;
        self.store.write(SNAPSHOT_KEY, &encoded)?;
        Ok(())
    }
}
