//! Move legality, state transition, and game-end detection.
//!
//! All operations are deterministic and know nothing about search. Legality
//! enforces the topological order implicitly: a slot is playable only once
//! both of its input wires are resolved.

use smallvec::SmallVec;

use crate::core::{
    winner_id, GameState, Move, MoveRecord, Player, Signal, GATE_KIND_COUNT,
};

use super::circuit::{wiring, SlotWiring, TOPOLOGY};
use super::error::MoveError;

/// Legal moves of one position. The opening has 4 playable slots times
/// 5 cards; no position has more.
pub type MoveList = SmallVec<[Move; 4 * GATE_KIND_COUNT]>;

impl GameState {
    /// Whether a slot is empty and both of its inputs are resolved.
    fn slot_playable(&self, slot: usize, wiring: &SlotWiring) -> bool {
        self.slots[slot].is_none() && wiring.inputs.iter().all(|&i| self.signals[i].is_set())
    }

    /// Enumerate legal moves for the player to move.
    ///
    /// Order: ascending slot, then canonical hand order.
    #[must_use]
    pub fn valid_moves(&self) -> MoveList {
        let hand = self.hands[self.current_player];
        let mut moves = MoveList::new();
        if hand.is_empty() {
            return moves;
        }

        for (slot, w) in TOPOLOGY.iter().enumerate() {
            if self.slot_playable(slot, w) {
                moves.extend(hand.iter().map(|gate| Move::new(slot as u8, gate)));
            }
        }
        moves
    }

    /// Whether any legal move exists, without building the list.
    #[must_use]
    pub fn has_valid_moves(&self) -> bool {
        !self.hands[self.current_player].is_empty()
            && TOPOLOGY
                .iter()
                .enumerate()
                .any(|(slot, w)| self.slot_playable(slot, w))
    }

    /// Check a move against the current state without applying it.
    pub fn check_move(&self, mv: Move) -> Result<&'static SlotWiring, MoveError> {
        let slot = mv.slot;
        let w = wiring(slot as usize).ok_or(MoveError::SlotOutOfRange { slot })?;

        if self.slots[slot as usize].is_some() {
            return Err(MoveError::SlotOccupied { slot });
        }
        if !self.hands[self.current_player].contains(mv.gate) {
            return Err(MoveError::GateNotInHand {
                player: self.current_player,
                gate: mv.gate,
            });
        }
        if !w.inputs.iter().all(|&i| self.signals[i].is_set()) {
            return Err(MoveError::InputsUnresolved { slot });
        }
        Ok(w)
    }

    /// Apply a move for the player to move.
    ///
    /// Removes the card from the mover's hand, places it, writes the gate's
    /// output wire, records the move, and passes the turn. On error the state
    /// is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let w = self.check_move(mv)?;
        let player = self.current_player;

        let [a, b] = w.inputs.map(|i| self.signals[i].value());
        let (Some(a), Some(b)) = (a, b) else {
            return Err(MoveError::InputsUnresolved { slot: mv.slot });
        };

        self.hands[player].remove(mv.gate);
        self.slots[mv.slot as usize] = Some(mv.gate);
        debug_assert_eq!(self.signals[w.output], Signal::Unset);
        self.signals[w.output] = Signal::from(mv.gate.eval(a, b));
        self.history.push_back(MoveRecord::new(player, mv));
        self.current_player = player.opponent();
        Ok(())
    }

    /// The game is over once the final wire is resolved and nobody can move.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.final_signal().is_set() && !self.has_valid_moves()
    }

    /// The player whose target equals the final wire.
    ///
    /// `None` when the final wire is unresolved, or resolved but matching
    /// neither target. Callers that need to tell those apart check
    /// [`GameState::is_terminal`] first. If both players share a target,
    /// player one is credited.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        let value = self.final_signal().value()?;
        Player::ALL
            .into_iter()
            .find(|&p| self.targets[p] == value)
    }

    /// Winner as a numeric id: 0 (none), 1 or 2.
    #[must_use]
    pub fn winner_id(&self) -> u8 {
        winner_id(self.winner())
    }
}
