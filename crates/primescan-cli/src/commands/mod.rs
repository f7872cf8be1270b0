//! CLI command implementations.

pub mod analyze;
pub mod sample;
pub mod search;
pub mod verify;
