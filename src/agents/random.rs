//! Uniform random baseline.

use crate::core::{GameRng, GameState, Move, Player};

use super::Agent;

/// Agent that plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    player: Player,
    rng: GameRng,
}

impl RandomAgent {
    /// Create a seeded random agent for `player`.
    pub fn new(player: Player, seed: u64) -> Self {
        Self {
            player,
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.valid_moves();
        self.rng.choose(&moves).copied()
    }
}
