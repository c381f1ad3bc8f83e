//! Taskboard: a kanban-style task board.
//!
//! The board has three fixed columns (`todo`, `inProgress`, `done`), each an
//! ordered list of tasks. Tasks are added, edited, completed, deleted, and
//! moved by drag gestures; every committed change is written to a local
//! key-value store and the board is rehydrated from it on startup.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Board value types and the pure drag transition
//! - **Ports**: The key-value storage contract
//! - **Adapters**: In-memory and file-backed stores
//!
//! # Modules
//!
//! - [`board`]: Board model, storage, and the board store service
//! - [`config`]: Snapshot directory resolution

pub mod board;
pub mod config;
