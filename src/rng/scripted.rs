//! Scripted random source for replays and tests

use std::collections::VecDeque;

use super::RandomSource;

/// Plays back a fixed list of indices.
///
/// Each draw takes the next index from the script, clamped into range. Once
/// the script runs out every draw returns 0, i.e. the first candidate.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<usize>,
    draws: usize,
}

impl ScriptedRandom {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// Indices not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Total draws made so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.draws += 1;
        let idx = self.script.pop_front().unwrap_or(0);
        idx.min(len.saturating_sub(1))
    }
}
