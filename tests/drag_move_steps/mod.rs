//! Step definitions for drag move scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
