//! Errors raised by the rules engine.

use thiserror::Error;

use crate::core::{GateKind, Player};

/// A move that cannot be applied to the current state.
///
/// These indicate a caller bug: every legal move is listed by
/// `GameState::valid_moves`, so callers that pick from that list never see
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("slot {slot} does not exist")]
    SlotOutOfRange { slot: u8 },

    #[error("slot {slot} already holds a gate")]
    SlotOccupied { slot: u8 },

    #[error("{player} has no {gate} card")]
    GateNotInHand { player: Player, gate: GateKind },

    #[error("inputs of slot {slot} are not resolved yet")]
    InputsUnresolved { slot: u8 },
}
