//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, SLOT_COUNT};

/// Configuration for a batch of evaluation games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play.
    pub games: usize,

    /// Base seed; game `i` uses `seed + i` to build its agents.
    pub seed: u64,

    /// Maximum moves per game. A game cut off here is scored as a draw.
    pub max_moves: usize,

    /// Board setup shared by every game.
    pub game: GameConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 0,
            max_moves: SLOT_COUNT,
            game: GameConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the board setup.
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Seed for game `index`.
    #[must_use]
    pub fn game_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}
