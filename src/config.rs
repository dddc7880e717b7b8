//! Runtime configuration
//!
//! Command-line flags, each with an environment-variable fallback.

use std::path::PathBuf;

use clap::Parser;

use crate::rng::StdRandom;

/// Hunt the Wumpus
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "wumpus")]
#[command(version, about = "Hunt the Wumpus - twenty caves, five crooked arrows", long_about = None)]
pub struct GameConfig {
    /// Fixed seed for a reproducible game; seeded from the OS if absent
    #[arg(long, env = "WUMPUS_SEED")]
    pub seed: Option<u64>,

    /// Send the log to this file instead of stderr
    #[arg(long, env = "WUMPUS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl GameConfig {
    /// Random source matching the configured seed
    pub fn random_source(&self) -> StdRandom {
        match self.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        }
    }
}
