//! Aggregate results over many games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Move, Player};

use super::play::GameRecord;

/// Win/draw counts and game lengths over a batch of games.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Games won by player one.
    pub p1_wins: usize,

    /// Games won by player two.
    pub p2_wins: usize,

    /// Games won by neither.
    pub draws: usize,

    /// Moves played in each game, in play order.
    pub game_lengths: Vec<usize>,

    /// Results keyed by opening move.
    #[serde(skip)]
    pub openings: OpeningTally,
}

impl MatchSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished game.
    pub fn record(&mut self, game: &GameRecord) {
        match game.winner {
            Some(Player::One) => self.p1_wins += 1,
            Some(Player::Two) => self.p2_wins += 1,
            None => self.draws += 1,
        }
        self.game_lengths.push(game.length);
        self.openings.record(game);
    }

    /// Number of games recorded.
    #[must_use]
    pub fn games(&self) -> usize {
        self.game_lengths.len()
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            count as f64 / self.games() as f64
        }
    }

    /// Fraction of games won by player one.
    #[must_use]
    pub fn p1_win_rate(&self) -> f64 {
        self.rate(self.p1_wins)
    }

    /// Fraction of games won by player two.
    #[must_use]
    pub fn p2_win_rate(&self) -> f64 {
        self.rate(self.p2_wins)
    }

    /// Fraction of games won by neither.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Mean game length in moves (0 if no games).
    #[must_use]
    pub fn mean_length(&self) -> f64 {
        if self.game_lengths.is_empty() {
            return 0.0;
        }
        self.game_lengths.iter().sum::<usize>() as f64 / self.game_lengths.len() as f64
    }

    /// Population standard deviation of game length (0 if no games).
    #[must_use]
    pub fn std_length(&self) -> f64 {
        if self.game_lengths.is_empty() {
            return 0.0;
        }
        let mean = self.mean_length();
        let variance = self
            .game_lengths
            .iter()
            .map(|&len| (len as f64 - mean).powi(2))
            .sum::<f64>()
            / self.game_lengths.len() as f64;
        variance.sqrt()
    }

    /// Shortest game (0 if no games).
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.game_lengths.iter().copied().min().unwrap_or(0)
    }

    /// Longest game (0 if no games).
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.game_lengths.iter().copied().max().unwrap_or(0)
    }
}

/// Games and first-mover wins for one opening move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpeningStat {
    /// Games that started with this move.
    pub games: usize,

    /// Of those, games the first mover won.
    pub first_mover_wins: usize,
}

impl OpeningStat {
    /// First-mover win rate for this opening.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.first_mover_wins as f64 / self.games as f64
        }
    }
}

/// Tally of results by opening move.
#[derive(Clone, Debug, Default)]
pub struct OpeningTally {
    stats: FxHashMap<Move, OpeningStat>,
}

impl OpeningTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one game. Games with no moves are ignored.
    pub fn record(&mut self, game: &GameRecord) {
        let Some(first) = game.moves.first() else {
            return;
        };
        let entry = self.stats.entry(first.mv).or_default();
        entry.games += 1;
        if game.winner == Some(first.player) {
            entry.first_mover_wins += 1;
        }
    }

    /// Stats for one opening move.
    #[must_use]
    pub fn get(&self, mv: Move) -> Option<&OpeningStat> {
        self.stats.get(&mv)
    }

    /// Number of distinct openings seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Check if no opening has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// All openings, most played first; ties in move order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Move, OpeningStat)> {
        let mut ranked: Vec<_> = self.stats.iter().map(|(&mv, &stat)| (mv, stat)).collect();
        ranked.sort_by(|a, b| b.1.games.cmp(&a.1.games).then(a.0.cmp(&b.0)));
        ranked
    }
}
