//! Core MCTS search algorithm.
//!
//! Each decision builds a fresh tree rooted at a clone of the caller's state
//! and runs the four MCTS phases once per simulation:
//! 1. Selection: descend by UCB1 while the node is fully expanded
//! 2. Expansion: add one random untried move as a child
//! 3. Rollout: play the child's position out at random
//! 4. Backpropagation: credit the result to the child and all ancestors
//!
//! The move returned is the root child with the most visits. The tree is
//! handed back to the caller or dropped; it is never reused for the next
//! decision.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{GameRng, GameState, Move, Player};

use super::config::MCTSConfig;
use super::policy::{RandomRollout, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::{MoveStat, SearchStats};
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Owns the configuration, the RNG, and the policies. Trees are built per
/// call and are owned exclusively by the call that builds them.
pub struct MCTSSearch {
    /// Search configuration.
    config: MCTSConfig,

    /// RNG for expansion order and rollouts.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy>,

    /// Statistics of the most recent search.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a new MCTS search context seeded from the config.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomRollout),
            stats: SearchStats::default(),
        }
    }

    /// Replace the RNG (for reproducible tests).
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Choose a move for `player` in `state`.
    ///
    /// Returns `None` when `state` has no legal move. `state` is never
    /// modified; the search works on its own clone.
    pub fn search(&mut self, state: &GameState, player: Player) -> Option<Move> {
        let tree = self.build_tree(state, player);
        let best = tree
            .most_visited_child(tree.root())
            .and_then(|id| tree.get(id).mv);

        if let Some(mv) = best {
            debug!(
                %mv,
                %player,
                iterations = self.stats.iterations,
                nodes = tree.len(),
                time_us = self.stats.time_us,
                iterations_per_second = self.stats.iterations_per_second(),
                "MCTS move selected"
            );
        }
        best
    }

    /// Run a search and summarize every root child, most visited first.
    ///
    /// Diagnostic only; [`MCTSSearch::search`] does not consult it.
    pub fn move_statistics(&mut self, state: &GameState, player: Player) -> Vec<MoveStat> {
        let tree = self.build_tree(state, player);
        let root = tree.root_node();

        let mut stats: Vec<MoveStat> = root
            .children
            .iter()
            .map(|&id| tree.get(id))
            .filter_map(|child| child.mv.map(|mv| MoveStat::new(mv, child.visits, child.wins)))
            .collect();
        // Stable: equal visit counts keep child order
        stats.sort_by(|a, b| b.visits.cmp(&a.visits));
        stats
    }

    /// Build and search a fresh tree for `player` from `state`.
    ///
    /// Runs `simulations` iterations, or fewer if the time limit runs out.
    /// A live root always gets at least one iteration, even with a budget
    /// of zero, so there is always a child to pick. The limit is checked
    /// between iterations only, so the tree is consistent and usable as the
    /// best answer found so far.
    pub fn build_tree(&mut self, state: &GameState, player: Player) -> MCTSTree {
        let start = Instant::now();
        self.stats.reset();

        let mut tree = MCTSTree::new(state.clone());
        if tree.root_node().untried.is_empty() {
            // No legal moves: nothing to choose between.
            return tree;
        }

        let deadline = self.config.time_limit().map(|limit| start + limit);
        let budget = self.config.simulations.max(1);

        for _ in 0..budget {
            if self.stats.iterations > 0 {
                if let Some(deadline) = deadline {
                    if Instant::now() >= deadline {
                        self.stats.stopped_by_time = true;
                        break;
                    }
                }
            }
            self.iteration(&mut tree, player);
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        tree
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, tree: &mut MCTSTree, player: Player) {
        // === SELECTION ===
        let mut current = tree.root();
        loop {
            let node = tree.get(current);
            if !node.is_fully_expanded() || node.children.is_empty() {
                break;
            }
            match tree.best_child(current, self.selection.as_ref(), self.config.exploration_constant) {
                Some(child) => current = child,
                None => break,
            }
        }

        // === EXPANSION ===
        let node = tree.get(current);
        if !node.state.is_terminal() && !node.is_fully_expanded() {
            if let Some(child) = tree.expand(current, &mut self.rng) {
                current = child;
                self.stats.nodes_expanded += 1;
                self.stats.max_depth = self.stats.max_depth.max(tree.get(child).depth);
            }
        }

        // === SIMULATION ===
        let mut sim_rng = self.rng.fork();
        let result = self.simulation.rollout(&tree.get(current).state, &mut sim_rng);
        self.stats.rollouts += 1;

        // === BACKPROPAGATION ===
        tree.backpropagate(current, result, player);

        trace!(
            leaf = current.raw(),
            depth = tree.get(current).depth,
            winner = result.map_or(0, Player::id),
            tree_size = tree.len(),
            "MCTS simulation complete"
        );
    }

    /// Get search statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}
