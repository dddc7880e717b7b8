//! Turn resolution
//!
//! Applies one player command to the game state: walking through a tunnel
//! (and whatever the bats do about it) or loosing a crooked arrow.

use serde::{Deserialize, Serialize};

use super::events::Event;
use super::snapshot::HazardFlags;
use super::state::{GameState, GameStatus};
use crate::error::{GameError, Result};
use crate::rng::RandomSource;
use crate::world::{Cave, CaveGraph, CAVE_COUNT};

/// Longest flight a single arrow can make
pub const MAX_ARROW_HOPS: usize = 5;

/// Bat carries allowed in one turn before the bats give up
const MAX_BAT_CARRIES: usize = CAVE_COUNT;

/// Outcome of a move command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub events: Vec<Event>,
    pub status: GameStatus,
}

/// Outcome of a shoot command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootResult {
    /// Caves the arrow flew through, not counting the player's own.
    /// Empty when no arrow was loosed.
    pub path: Vec<Cave>,
    pub events: Vec<Event>,
    pub status: GameStatus,
}

/// Resolves moves and shots against a cave graph
#[derive(Debug, Clone, Copy)]
pub struct TurnEngine<'g> {
    graph: &'g CaveGraph,
}

impl<'g> TurnEngine<'g> {
    pub fn new(graph: &'g CaveGraph) -> Self {
        Self { graph }
    }

    /// Walk to an adjacent cave and face whatever lives there.
    ///
    /// A finished game or a cave with no tunnel from here is refused and the
    /// state is left untouched.
    pub fn move_player(
        &self,
        state: &mut GameState,
        random: &mut impl RandomSource,
        destination: Cave,
    ) -> Result<MoveResult> {
        state.ensure_playing()?;
        let from = state.player_cave;
        if !self.graph.is_adjacent(from, destination) {
            return Err(GameError::UnreachableDestination { from, to: destination });
        }

        log::debug!("Player moves {} -> {}", from, destination);
        state.player_cave = destination;
        let mut events = vec![Event::Moved { to: destination }];
        events.extend(self.resolve_after_player_action(state, random)?);
        Ok(MoveResult { events, status: state.status })
    }

    /// Settle the player's new cave: bats first, then pits, the Wumpus and
    /// the quiver. Warnings are emitted only if the player survives.
    pub fn resolve_after_player_action(
        &self,
        state: &mut GameState,
        random: &mut impl RandomSource,
    ) -> Result<Vec<Event>> {
        state.ensure_playing()?;
        let mut events = Vec::new();
        let caves: Vec<Cave> = self.graph.caves().collect();

        let mut carries = 0;
        while let Some(bat) = state.bat_caves.iter().position(|&b| b == state.player_cave) {
            if carries == MAX_BAT_CARRIES {
                log::warn!(
                    "Bats gave up after {} carries; player stays in cave {}",
                    carries,
                    state.player_cave
                );
                break;
            }
            carries += 1;

            let from = state.player_cave;
            events.push(Event::PickedUpByBat { from });

            let landing = random.choose(&caves, &[])?;
            let other_bat = state.bat_caves[1 - bat];
            // never share a cave with the other bat
            let roost = random.choose(&self.graph.neighbors(landing), &[other_bat])?;
            state.bat_caves[bat] = roost;
            state.player_cave = landing;
            log::debug!("Bat carried player {} -> {}, bat roosts in {}", from, landing, roost);
            events.push(Event::DroppedByBat { to: landing });
        }

        let here = state.player_cave;
        if state.pit_caves.contains(&here) {
            events.push(Event::FellInPit);
            state.finish(GameStatus::Lost);
        } else if state.wumpus_cave == here {
            events.push(Event::DevouredByWumpus);
            state.finish(GameStatus::Lost);
        } else if state.arrows_remaining < 1 {
            events.push(Event::OutOfArrows);
            state.finish(GameStatus::Lost);
        } else {
            events.extend(HazardFlags::around(state, self.graph, here).warnings());
        }
        Ok(events)
    }

    /// Loose one arrow along up to five requested caves.
    ///
    /// Where a requested cave has no tunnel from the arrow's position the
    /// arrow goes wild into a random neighbour, never straight back the way
    /// it came. The whole path is flown before anything is decided.
    pub fn shoot(
        &self,
        state: &mut GameState,
        random: &mut impl RandomSource,
        targets: &[Cave],
    ) -> Result<ShootResult> {
        state.ensure_playing()?;
        if targets.is_empty() {
            return Err(GameError::NoTargetsGiven);
        }

        // The last arrow missed; nothing left to loose
        if state.arrows_remaining < 1 {
            let events = self.resolve_after_player_action(state, random)?;
            return Ok(ShootResult {
                path: Vec::new(),
                events,
                status: state.status,
            });
        }

        let mut events = Vec::new();
        let mut path = Vec::with_capacity(MAX_ARROW_HOPS);
        let mut previous: Option<Cave> = None;
        let mut current = state.player_cave;

        for &target in targets.iter().take(MAX_ARROW_HOPS) {
            let candidates: Vec<Cave> = self
                .graph
                .neighbors(current)
                .into_iter()
                .filter(|&c| Some(c) != previous)
                .collect();

            let next = if candidates.contains(&target) {
                target
            } else {
                let actual = random.choose(&candidates, &[])?;
                events.push(Event::ArrowDeflected { requested: target, actual });
                actual
            };
            log::debug!("Arrow {} -> {} (aimed at {})", current, next, target);

            path.push(next);
            previous = Some(current);
            current = next;
        }

        state.arrows_remaining -= 1;

        if path.contains(&state.wumpus_cave) {
            events.push(Event::WumpusSlain);
            state.finish(GameStatus::Won);
        } else if path.contains(&state.player_cave) {
            events.push(Event::SelfInflictedWound);
            state.finish(GameStatus::Lost);
        } else {
            events.push(Event::ArrowMissed);
            let from = state.wumpus_cave;
            state.wumpus_cave = random.choose(&self.graph.neighbors(from), &[])?;
            log::debug!("Wumpus disturbed: {} -> {}", from, state.wumpus_cave);
        }

        Ok(ShootResult {
            path,
            events,
            status: state.status,
        })
    }
}
