//! # gate-duel
//!
//! A two-player logic-circuit card game and the Monte Carlo Tree Search
//! that plays it.
//!
//! Five input wires feed a triangular board of ten gate slots. Players
//! alternate placing one of their five gate cards (AND, OR, NAND, NOR, XOR)
//! into a slot whose inputs are resolved; the slot's output wire is written
//! at once. After ten moves the last gate resolves the final wire, and the
//! player whose target bit it matches wins.
//!
//! ## Architecture
//!
//! - **Pure rules**: the engine is deterministic and owns no randomness,
//!   so search can clone and replay states freely.
//!
//! - **Persistent history**: O(1) state cloning via `im-rs`.
//!
//! - **Seeded search**: every random choice flows from an injected
//!   ChaCha8 `GameRng`; equal seeds give equal decisions.
//!
//! ## Modules
//!
//! - `core`: players, gates, wires, moves, state, RNG, configuration
//! - `rules`: circuit topology, legal moves, transitions, winner
//! - `mcts`: Monte Carlo Tree Search
//! - `nn`: state encoding and the external move-scorer interface
//! - `agents`: MCTS, random and scored agents behind one trait, plus
//!   difficulty presets
//! - `evaluation`: agent-vs-agent matches, seat-swapped duels, result
//!   summaries

pub mod core;
pub mod rules;
pub mod mcts;
pub mod nn;
pub mod agents;
pub mod evaluation;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameState, GateKind, Hand, Move, MoveRecord, Player, PlayerMap, Signal,
    MOVE_SPACE_SIZE, SLOT_COUNT,
};

pub use crate::rules::{MoveError, MoveList, SlotWiring};

pub use crate::mcts::{
    MCTSConfig, MCTSNode, MCTSSearch, MCTSTree, MoveStat, NodeId, RandomRollout, SearchStats,
    SelectionPolicy, SimulationPolicy, TreeStats, UCB1,
};

pub use crate::nn::{CircuitEncoder, EncodedState, MoveScorer, ScorerError, StateEncoder};

pub use crate::agents::{Agent, Difficulty, MctsAgent, RandomAgent, ScoredAgent};

pub use crate::evaluation::{
    evaluate, head_to_head, play_game, DuelSummary, GameRecord, MatchConfig, MatchError,
    MatchSummary, OpeningTally,
};
