//! Wumpus - Hunt the Wumpus
//!
//! Twenty caves on a dodecahedron, one Wumpus, two pits, two bats and five
//! crooked arrows. The [`game::TurnEngine`] resolves each move or shot
//! against a [`game::GameState`]; the [`ui`] module wraps it in a text loop.

pub mod config;
pub mod error;
pub mod game;
pub mod rng;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use error::{GameError, Result};
pub use game::{status_snapshot, Event, GameState, GameStatus, TurnEngine};
pub use rng::{RandomSource, ScriptedRandom, StdRandom};
pub use world::{Cave, CaveGraph};

/// Crate version, shown in the log at start-up
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
