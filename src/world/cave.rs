//! Cave identifiers
//!
//! A cave is just its number. The only way to get one is through a range
//! check, so the rest of the engine never sees cave 0 or cave 21.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Number of caves in the map
pub const CAVE_COUNT: usize = 20;

/// A cave number in `1..=20`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cave(u8);

impl Cave {
    /// Validate a cave number
    pub fn new(id: u32) -> Result<Self> {
        if (1..=CAVE_COUNT as u32).contains(&id) {
            Ok(Self(id as u8))
        } else {
            Err(GameError::InvalidCave(id))
        }
    }

    /// Build a cave from a number already known to be in range
    pub(crate) const fn new_unchecked(id: u8) -> Self {
        Self(id)
    }

    /// The cave number as the player sees it
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position for table lookups
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All caves in ascending order
    pub fn all() -> impl Iterator<Item = Cave> {
        (1..=CAVE_COUNT as u8).map(Cave)
    }
}

impl TryFrom<u8> for Cave {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self> {
        Cave::new(id as u32)
    }
}

impl TryFrom<u32> for Cave {
    type Error = GameError;

    fn try_from(id: u32) -> Result<Self> {
        Cave::new(id)
    }
}

impl From<Cave> for u8 {
    fn from(cave: Cave) -> u8 {
        cave.0
    }
}

impl fmt::Display for Cave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
