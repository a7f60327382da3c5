//! Move-choosing agents.
//!
//! Every agent answers one question: given a state, which move? The
//! evaluation harness drives any mix of them through the [`Agent`] trait.
//!
//! - `MctsAgent`: UCT search, a fresh tree per decision
//! - `RandomAgent`: uniform over the legal moves (baseline)
//! - `ScoredAgent`: best legal move under an external `MoveScorer`
//!
//! `Difficulty` names the preset strength levels built from the first two.

pub mod difficulty;
pub mod mcts;
pub mod random;
pub mod scored;

pub use difficulty::Difficulty;
pub use mcts::MctsAgent;
pub use random::RandomAgent;
pub use scored::ScoredAgent;

use crate::core::{GameState, Move, Player};

/// A player that chooses moves.
pub trait Agent {
    /// Short display name, e.g. "MCTS".
    fn name(&self) -> &str;

    /// The seat this agent plays.
    fn player(&self) -> Player;

    /// Choose a move for `state`, or `None` if there is no legal move.
    ///
    /// `state` is read-only; agents that need scratch positions clone it.
    fn select_move(&mut self, state: &GameState) -> Option<Move>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn player(&self) -> Player {
        (**self).player()
    }

    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        (**self).select_move(state)
    }
}
