//! Narrative events
//!
//! What happened during a turn, in the order it happened. The front end
//! prints the `Display` text of each event as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::world::Cave;

/// Something the player should be told about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The player walked through a tunnel
    Moved { to: Cave },
    /// A bat grabbed the player
    PickedUpByBat { from: Cave },
    /// ...and let go somewhere else
    DroppedByBat { to: Cave },
    FellInPit,
    DevouredByWumpus,
    OutOfArrows,
    WumpusNearby,
    PitNearby,
    BatsNearby,
    /// A requested hop had no tunnel, so the arrow picked its own way
    ArrowDeflected { requested: Cave, actual: Cave },
    WumpusSlain,
    SelfInflictedWound,
    ArrowMissed,
}

impl Event {
    /// Proximity warnings, as opposed to things that happened
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::WumpusNearby | Event::PitNearby | Event::BatsNearby)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Moved { to } => write!(f, "Moving to cave {}.", to),
            Event::PickedUpByBat { from } => {
                write!(f, "ZAP! A giant bat snatches you out of cave {}!", from)
            }
            Event::DroppedByBat { to } => write!(f, "The bat drops you in cave {}.", to),
            Event::FellInPit => f.write_str("YYYIIIIEEEE... You fell into a bottomless pit!"),
            Event::DevouredByWumpus => f.write_str("Tsk tsk tsk. The Wumpus got you!"),
            Event::OutOfArrows => {
                f.write_str("Your quiver is empty. The Wumpus will find you soon enough.")
            }
            Event::WumpusNearby => f.write_str("I smell a Wumpus!"),
            Event::PitNearby => f.write_str("I feel a draft."),
            Event::BatsNearby => f.write_str("Bats nearby!"),
            Event::ArrowDeflected { requested, actual } => write!(
                f,
                "No tunnel leads to cave {}; the arrow veers into cave {}.",
                requested, actual
            ),
            Event::WumpusSlain => f.write_str("Aha! You got the Wumpus!"),
            Event::SelfInflictedWound => f.write_str("Ouch! The arrow got you!"),
            Event::ArrowMissed => f.write_str("Missed. Somewhere in the dark the Wumpus stirs."),
        }
    }
}
