//! MCTS configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Simulations (select, expand, rollout, backpropagate) per decision.
    /// A live position always gets at least one, even with a budget of 0.
    pub simulations: u32,

    /// UCB1 exploration constant (default: 1.41).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Random seed for expansion order and rollouts.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Optional wall-clock budget per decision, in milliseconds.
    /// Checked between simulations only; the search never stops mid-iteration.
    pub time_limit_ms: Option<u64>,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            simulations: 1000,
            exploration_constant: 1.41,
            seed: 42,
            time_limit_ms: None,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with a custom simulation budget.
    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.simulations = simulations;
        self
    }

    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(limit.as_millis() as u64);
        self
    }

    /// The wall-clock budget, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}
