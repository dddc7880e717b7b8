//! Game state
//!
//! Where everything is, how many arrows are left, and whether the hunt is
//! still on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::rng::RandomSource;
use crate::world::{Cave, CaveGraph};

/// Arrows in the quiver at the start of a game
pub const STARTING_ARROWS: u32 = 5;

/// Outcome of the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the game is won or lost
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Positions of the player and every hazard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Where the player stands
    pub(crate) player_cave: Cave,
    /// Where the Wumpus sleeps
    pub(crate) wumpus_cave: Cave,
    /// Bottomless pits
    pub(crate) pit_caves: [Cave; 2],
    /// Giant bats; a carried bat resettles, so these move during play
    pub(crate) bat_caves: [Cave; 2],
    /// Crooked arrows left in the quiver
    pub(crate) arrows_remaining: u32,
    /// Playing until won or lost, never back
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Start a new game with randomly placed player and hazards.
    ///
    /// The Wumpus never starts next to the player, and no two of the six
    /// occupied caves coincide.
    pub fn initialize(graph: &CaveGraph, random: &mut impl RandomSource) -> Result<Self> {
        let caves: Vec<Cave> = graph.caves().collect();

        let player = random.choose(&caves, &[])?;

        let mut taken = vec![player];
        taken.extend(graph.neighbors(player));
        let wumpus = random.choose(&caves, &taken)?;

        let free: Vec<Cave> = caves
            .iter()
            .copied()
            .filter(|&c| c != player && c != wumpus)
            .collect();
        let pits = random.choose_distinct(&free, 2)?;

        let free: Vec<Cave> = free.into_iter().filter(|c| !pits.contains(c)).collect();
        let bats = random.choose_distinct(&free, 2)?;

        let state = Self::from_layout(player, wumpus, [pits[0], pits[1]], [bats[0], bats[1]])?;
        log::info!("New hunt: player starts in cave {}", player);
        log::debug!(
            "Layout: wumpus {}, pits {:?}, bats {:?}",
            state.wumpus_cave,
            state.pit_caves,
            state.bat_caves
        );
        Ok(state)
    }

    /// Build a state from an explicit layout with a full quiver.
    ///
    /// All six caves must be different.
    pub fn from_layout(player: Cave, wumpus: Cave, pits: [Cave; 2], bats: [Cave; 2]) -> Result<Self> {
        let occupied = [player, wumpus, pits[0], pits[1], bats[0], bats[1]];
        for (i, a) in occupied.iter().enumerate() {
            if occupied[i + 1..].contains(a) {
                return Err(GameError::OverlappingCaves);
            }
        }
        Ok(Self {
            player_cave: player,
            wumpus_cave: wumpus,
            pit_caves: pits,
            bat_caves: bats,
            arrows_remaining: STARTING_ARROWS,
            status: GameStatus::Playing,
        })
    }

    /// Override the number of arrows
    pub fn with_arrows(mut self, arrows: u32) -> Self {
        self.arrows_remaining = arrows;
        self
    }

    pub fn player_cave(&self) -> Cave {
        self.player_cave
    }

    pub fn wumpus_cave(&self) -> Cave {
        self.wumpus_cave
    }

    pub fn pit_caves(&self) -> [Cave; 2] {
        self.pit_caves
    }

    pub fn bat_caves(&self) -> [Cave; 2] {
        self.bat_caves
    }

    pub fn arrows_remaining(&self) -> u32 {
        self.arrows_remaining
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Fail with `GameOver` unless the hunt is still on
    pub(crate) fn ensure_playing(&self) -> Result<()> {
        if self.status.is_over() {
            Err(GameError::GameOver(self.status))
        } else {
            Ok(())
        }
    }

    /// End the game. Only ever called while playing.
    pub(crate) fn finish(&mut self, status: GameStatus) {
        debug_assert!(!self.status.is_over(), "status changed after the game ended");
        log::debug!("Status transition: {:?} -> {:?}", self.status, status);
        self.status = status;
    }
}
