//! Evaluation harness: play agents against each other and tally results.
//!
//! - `play_game`: one game between two agents, returning a `GameRecord`
//! - `evaluate`: a seeded batch of games, returning a `MatchSummary`
//! - `OpeningTally`: first-mover results broken down by opening move
//! - `head_to_head`: a seat-swapped duel, counted for one agent
//! - `difficulty_ladder` and `budget_sweep`: batches of duels and matches
//!
//! The harness only uses the public game and agent API.

pub mod config;
pub mod duel;
pub mod play;
pub mod summary;

pub use config::MatchConfig;
pub use duel::{
    budget_sweep, difficulty_ladder, head_to_head, BudgetResult, DuelSummary, BASELINE,
    BUDGET_PAIRS,
};
pub use play::{evaluate, play_game, GameRecord, MatchError};
pub use summary::{MatchSummary, OpeningStat, OpeningTally};
