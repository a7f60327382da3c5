//! Rules engine for the circuit game.
//!
//! - `circuit`: the fixed slot-to-wire topology
//! - `engine`: legal moves, move application, terminal and winner checks
//! - `error`: `MoveError` for moves that violate the rules
//!
//! The engine is pure and deterministic; it is what the search explores.

pub mod circuit;
pub mod engine;
pub mod error;

pub use circuit::{wiring, SlotWiring, TOPOLOGY};
pub use engine::MoveList;
pub use error::MoveError;
