//! Status snapshot
//!
//! A read-only view of the state, enough to draw the prompt between turns.

use serde::{Deserialize, Serialize};

use super::events::Event;
use super::state::{GameState, GameStatus};
use crate::world::{Cave, CaveGraph};

/// Which hazards are one tunnel away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HazardFlags {
    pub wumpus_nearby: bool,
    pub pit_nearby: bool,
    pub bat_nearby: bool,
}

impl HazardFlags {
    /// Sense the hazards around `cave`
    pub fn around(state: &GameState, graph: &CaveGraph, cave: Cave) -> Self {
        Self {
            wumpus_nearby: graph.is_adjacent(cave, state.wumpus_cave),
            pit_nearby: graph.is_adjacent_to_any(cave, &state.pit_caves),
            bat_nearby: graph.is_adjacent_to_any(cave, &state.bat_caves),
        }
    }

    /// One warning event per flag that is set
    pub fn warnings(self) -> Vec<Event> {
        let mut events = Vec::new();
        if self.wumpus_nearby {
            events.push(Event::WumpusNearby);
        }
        if self.pit_nearby {
            events.push(Event::PitNearby);
        }
        if self.bat_nearby {
            events.push(Event::BatsNearby);
        }
        events
    }
}

/// Everything the prompt needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub player_cave: Cave,
    pub neighbors: [Cave; 3],
    pub hazards: HazardFlags,
    pub arrows_remaining: u32,
    pub status: GameStatus,
}

/// Take a snapshot of the player's surroundings
pub fn status_snapshot(state: &GameState, graph: &CaveGraph) -> StatusSnapshot {
    let here = state.player_cave;
    StatusSnapshot {
        player_cave: here,
        neighbors: graph.neighbors(here),
        hazards: HazardFlags::around(state, graph, here),
        arrows_remaining: state.arrows_remaining,
        status: state.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cave(id: u32) -> Cave {
        Cave::new(id).unwrap()
    }

    #[test]
    fn test_snapshot_flags() {
        let graph = CaveGraph::dodecahedron();
        // cave 1 touches 2, 5, 8
        let state =
            GameState::from_layout(cave(1), cave(2), [cave(5), cave(20)], [cave(13), cave(16)])
                .unwrap();
        let snap = status_snapshot(&state, &graph);
        assert_eq!(snap.player_cave, cave(1));
        assert_eq!(snap.neighbors, [cave(2), cave(5), cave(8)]);
        assert!(snap.hazards.wumpus_nearby);
        assert!(snap.hazards.pit_nearby);
        assert!(!snap.hazards.bat_nearby);
        assert_eq!(snap.arrows_remaining, 5);
        assert_eq!(snap.status, GameStatus::Playing);
        assert_eq!(snap.hazards.warnings(), vec![Event::WumpusNearby, Event::PitNearby]);
    }

    #[test]
    fn test_snapshot_is_pure() {
        let graph = CaveGraph::dodecahedron();
        let state =
            GameState::from_layout(cave(10), cave(20), [cave(3), cave(4)], [cave(9), cave(6)])
                .unwrap();
        let before = state.clone();
        let snap = status_snapshot(&state, &graph);
        assert_eq!(state, before);
        assert!(snap.hazards.bat_nearby);
        assert!(!snap.hazards.wumpus_nearby);
    }

    #[test]
    fn test_snapshot_json() {
        let graph = CaveGraph::dodecahedron();
        let state =
            GameState::from_layout(cave(1), cave(12), [cave(3), cave(4)], [cave(7), cave(6)])
                .unwrap();
        let json = serde_json::to_value(status_snapshot(&state, &graph)).unwrap();
        assert_eq!(json["player_cave"], 1);
        assert_eq!(json["neighbors"], serde_json::json!([2, 5, 8]));
        assert_eq!(json["status"], "Playing");
    }
}
