//! Kanban-style task board.
//!
//! A fixed set of columns, each holding an ordered list of tasks, with
//! create/edit/delete/complete operations and drag-driven reordering or
//! cross-column movement. The board is persisted as a single snapshot and
//! rehydrated on startup. The module follows hexagonal architecture:
//!
//! - Domain types and the drag transition in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store and persistence services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
