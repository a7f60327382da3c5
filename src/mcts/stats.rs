//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Statistics collected during one MCTS decision.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Total iterations performed.
    pub iterations: u32,

    /// Nodes expanded (added to tree).
    pub nodes_expanded: u32,

    /// Rollouts performed.
    pub rollouts: u32,

    /// Maximum depth reached during search.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// Whether the wall-clock budget ended the search early.
    pub stopped_by_time: bool,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

/// Per-move summary of a root child, for diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveStat {
    /// The root move.
    pub mv: Move,

    /// Visits of the child reached by `mv`.
    pub visits: u32,

    /// Accumulated score of that child.
    pub wins: f64,

    /// `wins / visits`, or 0 if unvisited.
    pub win_rate: f64,

    /// Gate name, e.g. "NAND".
    pub gate_name: String,

    /// Slot index of the move.
    pub slot: u8,
}

impl MoveStat {
    /// Build from a move and its child's counters.
    pub fn new(mv: Move, visits: u32, wins: f64) -> Self {
        let win_rate = if visits > 0 { wins / visits as f64 } else { 0.0 };
        Self {
            mv,
            visits,
            wins,
            win_rate,
            gate_name: mv.gate.name().to_string(),
            slot: mv.slot,
        }
    }
}
