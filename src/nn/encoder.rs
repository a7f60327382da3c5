//! State encoding for model input.
//!
//! Transforms game state into the flat feature vector a move scorer reads.

use crate::core::{
    GameState, GateKind, Player, Signal, GATE_KIND_COUNT, MOVE_SPACE_SIZE, SIGNAL_COUNT, SLOT_COUNT,
};
use crate::nn::traits::EncodedState;

/// Number of features produced by [`CircuitEncoder`].
pub const FEATURE_COUNT: usize = SIGNAL_COUNT + SLOT_COUNT + 2 * GATE_KIND_COUNT + 1;

/// Encodes game state into tensors for model input.
pub trait StateEncoder: Send + Sync {
    /// Encode the full (public) game state.
    fn encode(&self, state: &GameState) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the score vector a matching scorer must return.
    fn action_space_size(&self) -> usize {
        MOVE_SPACE_SIZE
    }
}

/// The 36-feature circuit encoding.
///
/// Layout:
/// - `0..15`: wires, unset = -1, false = 0, true = 1
/// - `15..25`: slots, empty = 0, otherwise the gate id (1..=5)
/// - `25..30`: player one's hand, 1 per gate still held, in id order
/// - `30..35`: player two's hand, same layout
/// - `35`: side to move, 1 for player one, -1 for player two
#[derive(Clone, Copy, Debug, Default)]
pub struct CircuitEncoder;

impl StateEncoder for CircuitEncoder {
    fn encode(&self, state: &GameState) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());

        let (wires, rest) = encoded.tensor.split_at_mut(SIGNAL_COUNT);
        let (slots, rest) = rest.split_at_mut(SLOT_COUNT);
        let (hands, side) = rest.split_at_mut(2 * GATE_KIND_COUNT);

        for (out, signal) in wires.iter_mut().zip(state.signals()) {
            *out = match signal {
                Signal::Unset => -1.0,
                Signal::False => 0.0,
                Signal::True => 1.0,
            };
        }

        for (out, slot) in slots.iter_mut().zip(state.slots()) {
            *out = slot.map_or(0.0, |gate| f32::from(gate.id()));
        }

        // Zero already means "not held"
        for (row, player) in hands.chunks_exact_mut(GATE_KIND_COUNT).zip(Player::ALL) {
            let hand = state.hand(player);
            for (out, &gate) in row.iter_mut().zip(GateKind::ALL.iter()) {
                if hand.contains(gate) {
                    *out = 1.0;
                }
            }
        }

        if let Some(out) = side.first_mut() {
            *out = match state.current_player() {
                Player::One => 1.0,
                Player::Two => -1.0,
            };
        }

        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![FEATURE_COUNT]
    }
}
