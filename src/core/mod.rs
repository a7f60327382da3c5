//! Core game types: players, gates, wires, moves, state, RNG, configuration.
//!
//! These are plain data. The rules that relate them (which moves are legal,
//! what a move does, who has won) live in `crate::rules`.

pub mod action;
pub mod config;
pub mod gate;
pub mod player;
pub mod rng;
pub mod signal;
pub mod state;

pub use action::{Move, MoveRecord, MOVE_SPACE_SIZE, SLOT_COUNT};
pub use config::{GameConfig, INPUT_COUNT, STANDARD_INPUTS};
pub use gate::{GateKind, Hand, GATE_KIND_COUNT};
pub use player::{winner_id, Player, PlayerMap};
pub use rng::GameRng;
pub use signal::Signal;
pub use state::{GameState, FINAL_SIGNAL, SIGNAL_COUNT};
