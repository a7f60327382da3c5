//! Move representation: a gate card placed into a slot.
//!
//! Every move is a pair (slot, gate). The flat index `slot * 5 + gate`
//! enumerates the whole move space in 50 entries, which is the layout
//! external scorers use for their output vectors.

use serde::{Deserialize, Serialize};

use super::gate::{GateKind, GATE_KIND_COUNT};
use super::player::Player;

/// Number of gate slots on the board.
pub const SLOT_COUNT: usize = 10;

/// Size of the flat move space.
pub const MOVE_SPACE_SIZE: usize = SLOT_COUNT * GATE_KIND_COUNT;

/// A complete game move.
///
/// ```
/// use gate_duel::core::{GateKind, Move};
///
/// let mv = Move::new(3, GateKind::Xor);
/// assert_eq!(mv.index(), 19);
/// assert_eq!(Move::from_index(19), Some(mv));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Target gate slot (0..10).
    pub slot: u8,

    /// Gate card to place.
    pub gate: GateKind,
}

impl Move {
    #[must_use]
    pub const fn new(slot: u8, gate: GateKind) -> Self {
        Self { slot, gate }
    }

    /// Position in the flat move space.
    #[must_use]
    pub const fn index(self) -> usize {
        self.slot as usize * GATE_KIND_COUNT + (self.gate.id() as usize - 1)
    }

    /// Inverse of [`Move::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= MOVE_SPACE_SIZE {
            return None;
        }
        let gate = GateKind::ALL[index % GATE_KIND_COUNT];
        Some(Self::new((index / GATE_KIND_COUNT) as u8, gate))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.gate, self.slot)
    }
}

/// A played move with the player who made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The move made.
    pub mv: Move,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: Player, mv: Move) -> Self {
        Self { player, mv }
    }
}
