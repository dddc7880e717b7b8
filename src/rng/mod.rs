//! Randomness
//!
//! Every random draw in the game goes through [`RandomSource`], so a game can
//! be replayed exactly by swapping in a seeded or scripted source.

mod scripted;
mod seeded;

pub use scripted::ScriptedRandom;
pub use seeded::StdRandom;

use crate::error::{GameError, Result};

/// Uniform selection over finite sequences
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;

    /// Pick one element of `sequence` that is not in `excluding`.
    ///
    /// Candidates keep their order from `sequence`, so scripted indices
    /// refer to that order.
    fn choose<T: Copy + PartialEq>(&mut self, sequence: &[T], excluding: &[T]) -> Result<T> {
        let candidates: Vec<T> = sequence
            .iter()
            .copied()
            .filter(|item| !excluding.contains(item))
            .collect();
        if candidates.is_empty() {
            return Err(GameError::EmptyChoiceSet);
        }
        let idx = self.next_index(candidates.len());
        candidates.get(idx).copied().ok_or(GameError::EmptyChoiceSet)
    }

    /// Pick `count` distinct elements without replacement
    fn choose_distinct<T: Copy>(&mut self, sequence: &[T], count: usize) -> Result<Vec<T>> {
        if count > sequence.len() {
            return Err(GameError::InsufficientCandidates {
                requested: count,
                available: sequence.len(),
            });
        }
        let mut pool = sequence.to_vec();
        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = self.next_index(pool.len()).min(pool.len() - 1);
            picked.push(pool.swap_remove(idx));
        }
        Ok(picked)
    }
}

impl<R: RandomSource> RandomSource for &mut R {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}
