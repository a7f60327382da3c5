//! Search-based agent.

use crate::core::{GameState, Move, Player};
use crate::mcts::{MCTSConfig, MCTSSearch, MoveStat, SearchStats};

use super::Agent;

/// Agent that picks moves by Monte Carlo Tree Search.
///
/// One `MCTSSearch` (and so one RNG stream) lives for the agent's lifetime;
/// each decision still builds its own tree.
pub struct MctsAgent {
    player: Player,
    search: MCTSSearch,
}

impl MctsAgent {
    /// Create an agent for `player`.
    pub fn new(player: Player, config: MCTSConfig) -> Self {
        Self {
            player,
            search: MCTSSearch::new(config),
        }
    }

    /// Per-move summary of a fresh search from `state`, most visited first.
    pub fn move_statistics(&mut self, state: &GameState) -> Vec<MoveStat> {
        self.search.move_statistics(state, self.player)
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }

    /// Search configuration.
    pub fn config(&self) -> &MCTSConfig {
        self.search.config()
    }
}

impl Agent for MctsAgent {
    fn name(&self) -> &str {
        "MCTS"
    }

    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        self.search.search(state, self.player)
    }
}
