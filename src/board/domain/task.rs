//! Task value type.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// A unit of work on the board.
///
/// The identifier is fixed at creation; text and completion state change
/// through the consuming `with_*` helpers, which return the updated task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
}

impl Task {
    /// Creates an incomplete task.
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the task is marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Reassigns the identifier. Only snapshot repair may do this; ids are
    /// otherwise fixed for the life of a task.
    #[must_use]
    pub(crate) fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Replaces the text, keeping identifier and completion state.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Flips the completion flag.
    #[must_use]
    pub fn toggled(self) -> Self {
        let completed = !self.completed;
        self.with_completed(completed)
    }
}
