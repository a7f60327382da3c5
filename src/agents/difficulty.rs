//! Difficulty presets.
//!
//! Each level is a fixed agent recipe: `Easy` plays at random, the others
//! are MCTS with a growing simulation budget.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::mcts::MCTSConfig;

use super::{Agent, MctsAgent, RandomAgent};

/// Named strength level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    /// All levels, weakest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    /// Simulations per decision, or `None` for the random level.
    #[must_use]
    pub const fn simulations(self) -> Option<u32> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(5),
            Difficulty::Hard => Some(25),
            Difficulty::VeryHard => Some(500),
        }
    }

    /// Display name, e.g. "Hard (25 Sims)".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (Random)",
            Difficulty::Medium => "Medium (5 Sims)",
            Difficulty::Hard => "Hard (25 Sims)",
            Difficulty::VeryHard => "Very Hard (500 Sims)",
        }
    }

    /// Build this level's agent for `player`, seeded with `seed`.
    pub fn agent(self, player: Player, seed: u64) -> Box<dyn Agent> {
        match self.simulations() {
            None => Box::new(RandomAgent::new(player, seed)),
            Some(simulations) => Box::new(MctsAgent::new(
                player,
                MCTSConfig::default()
                    .with_simulations(simulations)
                    .with_seed(seed),
            )),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
