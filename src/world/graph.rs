//! Cave graph
//!
//! The fixed dodecahedral map: 20 caves, three tunnels each.

use super::cave::{Cave, CAVE_COUNT};
use crate::error::Result;

/// Tunnels out of each cave, indexed by `cave - 1`.
///
/// Neighbour order matters for replays: random picks over neighbours draw
/// from this order.
const TUNNELS: [[u8; 3]; CAVE_COUNT] = [
    [2, 5, 8],
    [1, 3, 10],
    [2, 4, 12],
    [3, 5, 14],
    [4, 1, 6],
    [5, 7, 15],
    [6, 8, 17],
    [1, 7, 9],
    [8, 10, 18],
    [2, 9, 11],
    [10, 12, 19],
    [3, 11, 13],
    [12, 14, 20],
    [4, 13, 15],
    [6, 14, 16],
    [15, 17, 20],
    [7, 16, 18],
    [9, 17, 19],
    [11, 18, 20],
    [13, 16, 19],
];

/// Read-only adjacency data for the whole map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaveGraph {
    tunnels: [[Cave; 3]; CAVE_COUNT],
}

impl CaveGraph {
    /// The classic dodecahedron map
    pub fn dodecahedron() -> Self {
        let tunnels = TUNNELS.map(|row| row.map(Cave::new_unchecked));
        Self { tunnels }
    }

    /// The three caves reachable from `cave`
    pub fn neighbors(&self, cave: Cave) -> [Cave; 3] {
        self.tunnels[cave.index()]
    }

    /// Neighbours of a raw cave number
    pub fn neighbors_of(&self, id: u32) -> Result<[Cave; 3]> {
        Ok(self.neighbors(Cave::new(id)?))
    }

    /// True if a tunnel joins `a` and `b`
    pub fn is_adjacent(&self, a: Cave, b: Cave) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// True if `a` has a tunnel into any of `caves`
    pub fn is_adjacent_to_any(&self, a: Cave, caves: &[Cave]) -> bool {
        caves.iter().any(|&c| self.is_adjacent(a, c))
    }

    /// Every cave in ascending order
    pub fn caves(&self) -> impl Iterator<Item = Cave> {
        Cave::all()
    }
}

impl Default for CaveGraph {
    fn default() -> Self {
        Self::dodecahedron()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn cave(id: u32) -> Cave {
        Cave::new(id).unwrap()
    }

    #[test]
    fn test_three_distinct_neighbors() {
        let graph = CaveGraph::dodecahedron();
        for c in graph.caves() {
            let n = graph.neighbors(c);
            assert!(!n.contains(&c), "cave {} is its own neighbour", c);
            assert_ne!(n[0], n[1]);
            assert_ne!(n[1], n[2]);
            assert_ne!(n[0], n[2]);
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = CaveGraph::dodecahedron();
        for a in graph.caves() {
            for b in graph.caves() {
                assert_eq!(graph.is_adjacent(a, b), graph.is_adjacent(b, a), "{} / {}", a, b);
            }
        }
    }

    #[test]
    fn test_classic_layout() {
        let graph = CaveGraph::dodecahedron();
        assert_eq!(graph.neighbors(cave(1)), [cave(2), cave(5), cave(8)]);
        assert_eq!(graph.neighbors(cave(5)), [cave(4), cave(1), cave(6)]);
        assert_eq!(graph.neighbors(cave(20)), [cave(13), cave(16), cave(19)]);
    }

    #[test]
    fn test_neighbors_of_rejects_bad_ids() {
        let graph = CaveGraph::dodecahedron();
        assert_eq!(graph.neighbors_of(0), Err(GameError::InvalidCave(0)));
        assert_eq!(graph.neighbors_of(21), Err(GameError::InvalidCave(21)));
        assert_eq!(graph.neighbors_of(2).unwrap(), [cave(1), cave(3), cave(10)]);
    }

    #[test]
    fn test_adjacent_to_any() {
        let graph = CaveGraph::dodecahedron();
        assert!(graph.is_adjacent_to_any(cave(1), &[cave(20), cave(8)]));
        assert!(!graph.is_adjacent_to_any(cave(1), &[cave(20), cave(3)]));
        assert!(!graph.is_adjacent_to_any(cave(1), &[]));
    }
}
