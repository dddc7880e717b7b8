//! World module
//!
//! Cave identifiers and the fixed tunnel map connecting them.

pub mod cave;
pub mod graph;

pub use cave::{Cave, CAVE_COUNT};
pub use graph::CaveGraph;
