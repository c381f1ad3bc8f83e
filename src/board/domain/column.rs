//! Ordered task sequence held by a single board column.

use super::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Ordered list of tasks; order is render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column(Vec<Task>);

impl Column {
    /// Creates a column holding the given tasks in order.
    #[must_use]
    pub const fn from_tasks(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }

    /// Number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the task at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    /// Returns the position of the task with the given identifier.
    #[must_use]
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.0.iter().position(|task| task.id() == id)
    }

    /// Iterates over the tasks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, task: Task) {
        self.0.push(task);
    }

    /// Inserts at `index`, appending when `index` is past the end.
    pub(crate) fn insert_clamped(&mut self, index: usize, task: Task) {
        let index = index.min(self.0.len());
        self.0.insert(index, task);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<Task> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Applies `update` to the task with the given identifier.
    ///
    /// Returns `false` when no task matches.
    pub(crate) fn update(&mut self, id: &TaskId, update: impl FnOnce(Task) -> Task) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };
        let task = self.0.remove(index);
        self.0.insert(index, update(task));
        true
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
