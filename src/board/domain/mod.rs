//! Domain model for the task board.
//!
//! Value types ([`Task`], [`Column`], [`Board`]) and the pure drag
//! [`transition`]. Nothing in this module performs I/O.

mod board;
mod column;
mod error;
mod ids;
mod task;
mod transition;

pub use board::Board;
pub use column::Column;
pub use error::{BoardInvariantError, ParseColumnIdError};
pub use ids::{ColumnId, TaskId};
pub use task::Task;
pub use transition::{BoardPosition, DragOutcome, transition};
