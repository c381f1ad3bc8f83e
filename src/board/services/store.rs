//! Board store: owns the current board and commits every mutation.

use tracing::{debug, info, warn};

use super::BoardPersistence;
use crate::board::{
    domain::{Board, BoardPosition, ColumnId, DragOutcome, Task, TaskId, transition},
    ports::KeyValueStore,
};

/// Single source of truth for the board.
///
/// Every operation computes the next board from the current one, commits
/// it, then persists it. References to tasks or indices that no longer
/// exist are no-ops, never errors.
#[derive(Debug)]
pub struct BoardStore<S>
where
    S: KeyValueStore,
{
    board: Board,
    persistence: BoardPersistence<S>,
}

impl<S> BoardStore<S>
where
    S: KeyValueStore,
{
    /// Creates a store from the snapshot held by `persistence`, or an empty
    /// board when there is none.
    #[must_use]
    pub fn open(persistence: BoardPersistence<S>) -> Self {
        let board = persistence.load();
        info!(tasks = board.task_count(), "board store opened");
        Self::new(board, persistence)
    }

    /// Creates a store starting from `board`.
    #[must_use]
    pub const fn new(board: Board, persistence: BoardPersistence<S>) -> Self {
        Self { board, persistence }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the store, returning the current board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Appends a new task to `column`.
    ///
    /// Text that is empty after trimming is ignored. The stored text is not
    /// trimmed.
    pub fn add_task(&mut self, column: ColumnId, text: &str) -> &Board {
        self.add_task_with_id(column, text);
        &self.board
    }

    /// Appends a new task to `column` and returns its identifier.
    ///
    /// Returns `None`, leaving the board untouched, when `text` is empty
    /// after trimming.
    pub fn add_task_with_id(&mut self, column: ColumnId, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            debug!(%column, "ignoring task with blank text");
            return None;
        }

        let id = self.fresh_id();
        let task = Task::new(id.clone(), text);
        let next = self.board.clone().with_task_appended(column, task);
        info!(%column, task_id = %id, "task added");
        self.commit(next);
        Some(id)
    }

    /// Replaces the text of task `id` in `column`. The text is stored as
    /// given.
    pub fn edit_task(&mut self, column: ColumnId, id: &TaskId, text: &str) -> &Board {
        let next = self.board.clone().with_task_text(column, id, text);
        self.commit(next)
    }

    /// Removes task `id` from `column`.
    pub fn delete_task(&mut self, column: ColumnId, id: &TaskId) -> &Board {
        let next = self.board.clone().without_task(column, id);
        self.commit(next)
    }

    /// Flips the completion flag of task `id` in `column`.
    pub fn toggle_complete(&mut self, column: ColumnId, id: &TaskId) -> &Board {
        let next = self.board.clone().with_task_toggled(column, id);
        self.commit(next)
    }

    /// Moves the task at `source_index` of `source` to `destination_index`
    /// of `destination`.
    pub fn move_task(
        &mut self,
        source: ColumnId,
        source_index: usize,
        destination: ColumnId,
        destination_index: usize,
    ) -> &Board {
        let next = transition(
            &self.board,
            BoardPosition::new(source, source_index),
            BoardPosition::new(destination, destination_index),
        );
        self.commit(next)
    }

    /// Applies a completed drag gesture. A gesture without a destination
    /// leaves the board as it is.
    pub fn apply_drag(&mut self, outcome: DragOutcome) -> &Board {
        let Some(destination) = outcome.destination else {
            debug!(source = ?outcome.source, "drag cancelled");
            return &self.board;
        };
        self.move_task(
            outcome.source.column,
            outcome.source.index,
            destination.column,
            destination.index,
        )
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if !self.board.contains_task(&id) {
                return id;
            }
        }
    }

    fn commit(&mut self, next: Board) -> &Board {
        if next == self.board {
            debug!("board unchanged, skipping write");
            return &self.board;
        }

        self.board = next;
        if let Err(err) = self.persistence.save(&self.board) {
            warn!(error = %err, "failed to persist board");
        }
        &self.board
    }
}
