//! Adapter implementations for board storage ports.

pub mod file;
pub mod memory;
