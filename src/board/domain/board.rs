//! Board aggregate: the three fixed columns and their invariants.

use super::{BoardInvariantError, Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete board state, total over every [`ColumnId`].
///
/// Mutations are consuming: each `with_*`/`without_*` helper takes the
/// board by value and returns the next board, leaving untouched columns as
/// they were. Helpers that reference a missing task return the board
/// unchanged.
///
/// The serialized shape is the persisted snapshot format:
///
/// ```json
/// { "todo": [], "inProgress": [], "done": [] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default)]
    todo: Column,
    #[serde(default)]
    in_progress: Column,
    #[serde(default)]
    done: Column,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the column for `id`.
    #[must_use]
    pub const fn column(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Done => &self.done,
        }
    }

    pub(crate) const fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Replaces a whole column.
    #[must_use]
    pub fn with_column(mut self, id: ColumnId, column: Column) -> Self {
        *self.column_mut(id) = column;
        self
    }

    /// Iterates over `(column, tasks)` pairs in render order.
    pub fn columns(&self) -> impl Iterator<Item = (ColumnId, &Column)> {
        ColumnId::ALL.into_iter().map(move |id| (id, self.column(id)))
    }

    /// Task count per column in render order.
    #[must_use]
    pub fn task_counts(&self) -> [(ColumnId, usize); 3] {
        ColumnId::ALL.map(|id| (id, self.column(id).len()))
    }

    /// Total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns().map(|(_, column)| column.len()).sum()
    }

    /// Locates a task anywhere on the board.
    #[must_use]
    pub fn find_task(&self, id: &TaskId) -> Option<(ColumnId, usize)> {
        self.columns()
            .find_map(|(column_id, column)| column.position_of(id).map(|index| (column_id, index)))
    }

    /// Returns `true` if any column holds a task with this identifier.
    #[must_use]
    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.find_task(id).is_some()
    }

    /// Iterates over every task identifier in render order.
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.columns()
            .flat_map(|(_, column)| column.iter().map(Task::id))
    }

    /// Checks that no task identifier appears twice, within or across
    /// columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardInvariantError::DuplicateTask`] naming the first
    /// repeated identifier.
    pub fn validate(&self) -> Result<(), BoardInvariantError> {
        let mut seen = HashSet::new();
        for id in self.task_ids() {
            if !seen.insert(id) {
                return Err(BoardInvariantError::DuplicateTask(id.clone()));
            }
        }
        Ok(())
    }

    /// Returns a copy where every repeated task identifier after its first
    /// occurrence (in render order) is replaced by a fresh one, along with
    /// the number of identifiers replaced. Task order and all other fields
    /// are kept.
    #[must_use]
    pub fn with_unique_task_ids(&self) -> (Self, usize) {
        let mut taken: HashSet<TaskId> = self.task_ids().cloned().collect();
        let mut seen = HashSet::new();
        let mut replaced = 0;
        let mut repaired = Self::default();

        for (column_id, column) in self.columns() {
            let tasks = column
                .iter()
                .cloned()
                .map(|task| {
                    if seen.insert(task.id().clone()) {
                        return task;
                    }
                    replaced += 1;
                    let id = loop {
                        let candidate = TaskId::generate();
                        if taken.insert(candidate.clone()) {
                            break candidate;
                        }
                    };
                    seen.insert(id.clone());
                    task.with_id(id)
                })
                .collect();
            repaired = repaired.with_column(column_id, Column::from_tasks(tasks));
        }

        (repaired, replaced)
    }

    /// Appends `task` to the end of `column`.
    #[must_use]
    pub fn with_task_appended(mut self, column: ColumnId, task: Task) -> Self {
        self.column_mut(column).push(task);
        self
    }

    /// Replaces the text of the task `id` in `column`.
    #[must_use]
    pub fn with_task_text(
        mut self,
        column: ColumnId,
        id: &TaskId,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        self.column_mut(column).update(id, |task| task.with_text(text));
        self
    }

    /// Flips the completion flag of the task `id` in `column`.
    #[must_use]
    pub fn with_task_toggled(mut self, column: ColumnId, id: &TaskId) -> Self {
        self.column_mut(column).update(id, Task::toggled);
        self
    }

    /// Removes the task `id` from `column`.
    #[must_use]
    pub fn without_task(mut self, column: ColumnId, id: &TaskId) -> Self {
        let target = self.column_mut(column);
        if let Some(index) = target.position_of(id) {
            target.remove(index);
        }
        self
    }
}
