//! Error types
//!
//! Everything the engine can refuse to do, in one enum.

use crate::game::GameStatus;
use crate::world::Cave;

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised by the cave graph, the random source and the turn engine
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("There is no cave {0}; caves are numbered 1 to 20")]
    InvalidCave(u32),

    #[error("No tunnel leads from cave {from} to cave {to}")]
    UnreachableDestination { from: Cave, to: Cave },

    #[error("Shoot at what? Name at least one cave")]
    NoTargetsGiven,

    #[error("The game is over ({0})")]
    GameOver(GameStatus),

    #[error("Two entities were placed in the same cave")]
    OverlappingCaves,

    #[error("Random choice from an empty candidate set")]
    EmptyChoiceSet,

    #[error("Asked for {requested} distinct candidates but only {available} exist")]
    InsufficientCandidates { requested: usize, available: usize },
}

impl GameError {
    /// Whether the player can simply try again.
    ///
    /// Recoverable errors never change the game state. The rest point at a
    /// broken graph, a bad fixture or a caller bug.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::UnreachableDestination { .. }
                | GameError::NoTargetsGiven
                | GameError::GameOver(_)
        )
    }
}
