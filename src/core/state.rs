//! Game state.
//!
//! ## GameState
//!
//! Complete, perfect-information state of one game:
//! - 15 wire signals (5 inputs, 10 gate outputs)
//! - 10 gate slots
//! - each player's hand and target bit
//! - the player to move
//! - the ordered history of moves played
//!
//! All fields are plain values except the history, which is an `im::Vector`
//! so that cloning a state is O(1) and clones never alias mutable storage.
//! Search clones a state at every expansion and every rollout.
//!
//! Legality and state transition live in `crate::rules`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{MoveRecord, SLOT_COUNT};
use super::config::{GameConfig, INPUT_COUNT};
use super::gate::{GateKind, Hand};
use super::player::{Player, PlayerMap};
use super::signal::Signal;

/// Number of wires in the circuit.
pub const SIGNAL_COUNT: usize = 15;

/// Index of the final output wire.
pub const FINAL_SIGNAL: usize = SIGNAL_COUNT - 1;

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) signals: [Signal; SIGNAL_COUNT],
    pub(crate) slots: [Option<GateKind>; SLOT_COUNT],
    pub(crate) hands: PlayerMap<Hand>,
    pub(crate) targets: PlayerMap<bool>,
    pub(crate) current_player: Player,
    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// Create the opening position for a configuration.
    ///
    /// ## Defaults
    ///
    /// - signals 0..5 from `config.initial_inputs`, the rest `Unset`
    /// - all slots empty, both hands full
    /// - player one to move
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut signals = [Signal::Unset; SIGNAL_COUNT];
        for (signal, &input) in signals.iter_mut().zip(config.initial_inputs.iter()) {
            *signal = Signal::from(input);
        }
        debug_assert!(signals[INPUT_COUNT..].iter().all(|s| !s.is_set()));

        Self {
            signals,
            slots: [None; SLOT_COUNT],
            hands: PlayerMap::with_value(Hand::full()),
            targets: config.targets,
            current_player: Player::One,
            history: Vector::new(),
        }
    }

    /// The standard game: inputs `[0, 1, 0, 1, 0]`, player one wants 1,
    /// player two wants 0.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&GameConfig::default())
    }

    // === Read access ===

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Value of one wire. Panics if `index >= SIGNAL_COUNT`.
    #[must_use]
    pub fn signal(&self, index: usize) -> Signal {
        self.signals[index]
    }

    /// All wires.
    #[must_use]
    pub fn signals(&self) -> &[Signal; SIGNAL_COUNT] {
        &self.signals
    }

    /// Gate in a slot, if any. Panics if `index >= SLOT_COUNT`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<GateKind> {
        self.slots[index]
    }

    /// All slots.
    #[must_use]
    pub fn slots(&self) -> &[Option<GateKind>; SLOT_COUNT] {
        &self.slots
    }

    /// A player's remaining cards.
    #[must_use]
    pub fn hand(&self, player: Player) -> Hand {
        self.hands[player]
    }

    /// A player's target bit.
    #[must_use]
    pub fn target(&self, player: Player) -> bool {
        self.targets[player]
    }

    /// The final output wire.
    #[must_use]
    pub fn final_signal(&self) -> Signal {
        self.signals[FINAL_SIGNAL]
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of moves played.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
