//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to choose which child to descend into (UCB1)
//! - `SimulationPolicy`: How to play a position out to a result (random)

use crate::core::{GameRng, GameState, Player};

use super::node::MCTSNode;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Position in `children` of the child to follow, or `None` if empty.
    fn select(
        &self,
        parent: &MCTSNode,
        children: &mut dyn Iterator<Item = &MCTSNode>,
        c: f64,
    ) -> Option<usize>;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Formula: w/n + c * sqrt(2 ln(N) / n), with `w` and `n` the child's score
/// and visits and `N` the parent's visits. Ties go to the first maximum in
/// child order, which is expansion order.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl UCB1 {
    /// UCB1 value of one child.
    #[inline]
    #[must_use]
    pub fn value(parent_visits: u32, child: &MCTSNode, c: f64) -> f64 {
        if child.visits == 0 {
            return f64::INFINITY;
        }
        let n = child.visits as f64;
        let ln_parent = (parent_visits.max(1) as f64).ln();
        child.wins / n + c * (2.0 * ln_parent / n).sqrt()
    }
}

impl SelectionPolicy for UCB1 {
    fn select(
        &self,
        parent: &MCTSNode,
        children: &mut dyn Iterator<Item = &MCTSNode>,
        c: f64,
    ) -> Option<usize> {
        first_max_by(children.map(|child| Self::value(parent.visits, child, c)))
    }
}

/// Index of the first maximum. NaN never wins.
pub(crate) fn first_max_by<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.into_iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf node.
pub trait SimulationPolicy: Send + Sync {
    /// Play `state` out and return the winner (`None` for a draw or an
    /// unresolved final wire). The caller's state is never modified.
    fn rollout(&self, state: &GameState, rng: &mut GameRng) -> Option<Player>;
}

/// Random simulation policy.
///
/// Plays uniformly random legal moves until the game ends or no legal move
/// remains.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl SimulationPolicy for RandomRollout {
    fn rollout(&self, state: &GameState, rng: &mut GameRng) -> Option<Player> {
        let mut state = state.clone();

        while !state.is_terminal() {
            let moves = state.valid_moves();
            let Some(&mv) = rng.choose(&moves) else {
                break;
            };
            if state.apply_move(mv).is_err() {
                break;
            }
        }

        state.winner()
    }
}
