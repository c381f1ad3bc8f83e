//! Unit tests for the board module.


use crate::board::domain::{Board, Column, ColumnId, Task, TaskId};

/// Builds a column of incomplete tasks whose ids and texts are `ids`.
pub(super) fn column_of(ids: &[&str]) -> Column {
    Column::from_tasks(
        ids.iter()
            .map(|id| Task::new(TaskId::new(*id), format!("task {id}")))
            .collect(),
    )
}

/// Returns the task ids of `column` in order.
pub(super) fn ids_in(board: &Board, column: ColumnId) -> Vec<String> {
    board
        .column(column)
        .iter()
        .map(|task| task.id().as_str().to_owned())
        .collect()
}
