//! Seat-swapped duels, the difficulty ladder, and simulation-budget sweeps.
//!
//! Moving first or second is not symmetric in this game, so a fair
//! comparison plays every pairing from both seats and counts the results
//! from one agent's point of view.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agents::{Agent, Difficulty, MctsAgent};
use crate::core::Player;
use crate::mcts::MCTSConfig;

use super::config::MatchConfig;
use super::play::{evaluate, MatchError};
use super::summary::MatchSummary;

/// Level every rung of [`difficulty_ladder`] is usually measured against.
pub const BASELINE: Difficulty = Difficulty::Hard;

/// Simulation budgets `(first mover, second mover)` for [`budget_sweep`].
pub const BUDGET_PAIRS: [(u32, u32); 5] = [
    (100, 500),
    (300, 500),
    (500, 500),
    (500, 1000),
    (1000, 1000),
];

/// Results of a seat-swapped duel, counted for the agent under test.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DuelSummary {
    /// Games won by the agent under test, from either seat.
    pub wins: usize,

    /// Games won by the baseline.
    pub losses: usize,

    /// Games won by neither.
    pub draws: usize,

    /// Half where the agent under test moved first.
    pub as_first: MatchSummary,

    /// Half where the agent under test moved second.
    pub as_second: MatchSummary,
}

impl DuelSummary {
    /// Combine the two halves of a duel.
    pub fn from_halves(as_first: MatchSummary, as_second: MatchSummary) -> Self {
        Self {
            wins: as_first.p1_wins + as_second.p2_wins,
            losses: as_first.p2_wins + as_second.p1_wins,
            draws: as_first.draws + as_second.draws,
            as_first,
            as_second,
        }
    }

    /// Total games over both halves.
    #[must_use]
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            count as f64 / self.games() as f64
        }
    }

    /// Fraction of all games won by the agent under test.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    /// Fraction of all games won by the baseline.
    #[must_use]
    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    /// Fraction of all games drawn.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }
}

/// Play `config.games` games with `make_x` first, then as many with it
/// second, against agents from `make_baseline`.
///
/// Both halves use the same game seeds. The baseline factory receives the
/// bitwise complement of each seed so two identical recipes do not share an
/// RNG stream.
pub fn head_to_head<X, B>(
    mut make_x: impl FnMut(Player, u64) -> X,
    mut make_baseline: impl FnMut(Player, u64) -> B,
    config: &MatchConfig,
) -> Result<DuelSummary, MatchError>
where
    X: Agent,
    B: Agent,
{
    let as_first = evaluate(
        |seed| make_x(Player::One, seed),
        |seed| make_baseline(Player::Two, !seed),
        config,
    )?;
    let as_second = evaluate(
        |seed| make_baseline(Player::One, !seed),
        |seed| make_x(Player::Two, seed),
        config,
    )?;

    let duel = DuelSummary::from_halves(as_first, as_second);
    info!(
        games = duel.games(),
        wins = duel.wins,
        losses = duel.losses,
        draws = duel.draws,
        win_rate = duel.win_rate(),
        "duel complete"
    );
    Ok(duel)
}

/// Duel every [`Difficulty`] level against `baseline`, weakest first.
pub fn difficulty_ladder(
    baseline: Difficulty,
    config: &MatchConfig,
) -> Result<Vec<(Difficulty, DuelSummary)>, MatchError> {
    Difficulty::ALL
        .into_iter()
        .map(|level| -> Result<_, MatchError> {
            let duel = head_to_head(
                |player, seed| level.agent(player, seed),
                |player, seed| baseline.agent(player, seed),
                config,
            )?;
            info!(level = %level, baseline = %baseline, win_rate = duel.win_rate(), "ladder rung");
            Ok((level, duel))
        })
        .collect()
}

/// One row of a [`budget_sweep`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BudgetResult {
    /// Simulations per decision of the first mover.
    pub first: u32,

    /// Simulations per decision of the second mover.
    pub second: u32,

    /// Results with player one running `first` simulations.
    pub summary: MatchSummary,
}

/// Play MCTS against MCTS for each `(first, second)` budget pair.
pub fn budget_sweep(
    pairs: &[(u32, u32)],
    config: &MatchConfig,
) -> Result<Vec<BudgetResult>, MatchError> {
    pairs
        .iter()
        .map(|&(first, second)| -> Result<_, MatchError> {
            let summary = evaluate(
                |seed| MctsAgent::new(Player::One, budget(first, seed)),
                |seed| MctsAgent::new(Player::Two, budget(second, !seed)),
                config,
            )?;
            info!(first, second, p1_win_rate = summary.p1_win_rate(), "budget pair complete");
            Ok(BudgetResult {
                first,
                second,
                summary,
            })
        })
        .collect()
}

fn budget(simulations: u32, seed: u64) -> MCTSConfig {
    MCTSConfig::default()
        .with_simulations(simulations)
        .with_seed(seed)
}
