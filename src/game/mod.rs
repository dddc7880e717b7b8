//! Game module - Core game logic and state management

mod events;
mod snapshot;
mod state;
mod turn;

pub use events::Event;
pub use snapshot::{status_snapshot, HazardFlags, StatusSnapshot};
pub use state::{GameState, GameStatus, STARTING_ARROWS};
pub use turn::{MoveResult, ShootResult, TurnEngine, MAX_ARROW_HOPS};
