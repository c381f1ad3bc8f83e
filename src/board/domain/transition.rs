//! Drag-and-drop transition: recomputes the affected column sequences from a
//! single completed gesture.

use super::{Board, ColumnId};

/// A slot on the board: a column and an index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPosition {
    /// Column holding the slot.
    pub column: ColumnId,
    /// Zero-based index within the column.
    pub index: usize,
}

impl BoardPosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(column: ColumnId, index: usize) -> Self {
        Self { column, index }
    }
}

/// Result of a completed drag gesture.
///
/// `destination` is `None` when the gesture was cancelled, for example by
/// dropping outside every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// Where the dragged task started.
    pub source: BoardPosition,
    /// Where it was dropped, if anywhere.
    pub destination: Option<BoardPosition>,
}

impl DragOutcome {
    /// Gesture that ended over a column.
    #[must_use]
    pub const fn dropped(source: BoardPosition, destination: BoardPosition) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// Gesture that ended outside every column.
    #[must_use]
    pub const fn cancelled(source: BoardPosition) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Moves the task at `source` to `destination`, returning the new board.
///
/// Within one column this is a splice reorder: the task is removed first and
/// `destination.index` counts positions in the shortened sequence. Across
/// columns the destination index is relative to the destination column's
/// current contents. A destination index past the end appends.
///
/// If `source.index` does not address a task the board is returned
/// unchanged.
#[must_use]
pub fn transition(board: &Board, source: BoardPosition, destination: BoardPosition) -> Board {
    let mut source_column = board.column(source.column).clone();
    let Some(task) = source_column.remove(source.index) else {
        return board.clone();
    };

    if source.column == destination.column {
        source_column.insert_clamped(destination.index, task);
        return board.clone().with_column(source.column, source_column);
    }

    let mut destination_column = board.column(destination.column).clone();
    destination_column.insert_clamped(destination.index, task);
    board
        .clone()
        .with_column(source.column, source_column)
        .with_column(destination.column, destination_column)
}
