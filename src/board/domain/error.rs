//! Error types for board domain parsing and invariant checks.

use super::TaskId;
use thiserror::Error;

/// Error returned while parsing a column identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnIdError(pub String);

/// Board invariant violations detected by [`super::Board::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardInvariantError {
    /// The same task identifier appears more than once on the board.
    #[error("task {0} appears more than once on the board")]
    DuplicateTask(TaskId),
}
