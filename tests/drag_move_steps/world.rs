//! Shared world state for drag move BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Board, ColumnId},
    services::{BoardPersistence, BoardStore},
};

/// Store type used by the BDD world.
pub type TestBoardStore = BoardStore<InMemoryKeyValueStore>;

/// Scenario world for drag move behaviour tests.
pub struct BoardWorld {
    /// Storage shared by every store opened in the scenario.
    pub backing: InMemoryKeyValueStore,
    /// The store under test.
    pub store: TestBoardStore,
    /// Board as it was just before the last drag.
    pub before_drag: Option<Board>,
}

impl BoardWorld {
    /// Creates a world over empty storage.
    #[must_use]
    pub fn new() -> Self {
        let backing = InMemoryKeyValueStore::new();
        let store = BoardStore::open(BoardPersistence::new(Arc::new(backing.clone())));
        Self {
            backing,
            store,
            before_drag: None,
        }
    }

    /// Replaces the store with one opened from the shared storage.
    pub fn reopen(&mut self) {
        self.store = BoardStore::open(BoardPersistence::new(Arc::new(self.backing.clone())));
    }

    /// Replaces the store with one starting from `board`.
    pub fn start_from(&mut self, board: Board) {
        self.store = BoardStore::new(
            board,
            BoardPersistence::new(Arc::new(self.backing.clone())),
        );
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a column name used in feature files.
pub fn parse_column(raw: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::try_from(raw).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

/// Splits a comma-separated task id list.
pub fn parse_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}
