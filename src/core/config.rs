//! Game configuration.
//!
//! The circuit topology is fixed; what a game may vary is the value of the
//! five input wires and each player's target for the final wire.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};

/// Number of input wires fed into the first gate layer.
pub const INPUT_COUNT: usize = 5;

/// Input wires of the standard game.
pub const STANDARD_INPUTS: [bool; INPUT_COUNT] = [false, true, false, true, false];

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Values of signals 0..5 at game start.
    pub initial_inputs: [bool; INPUT_COUNT],

    /// Final-signal value each player is trying to produce.
    pub targets: PlayerMap<bool>,
}

impl Default for GameConfig {
    /// Standard game: player one wants a 1, player two wants a 0.
    fn default() -> Self {
        Self {
            initial_inputs: STANDARD_INPUTS,
            targets: PlayerMap::new(true, false),
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial input wires.
    #[must_use]
    pub fn with_inputs(mut self, inputs: [bool; INPUT_COUNT]) -> Self {
        self.initial_inputs = inputs;
        self
    }

    /// Set one player's target bit.
    #[must_use]
    pub fn with_target(mut self, player: Player, target: bool) -> Self {
        self.targets[player] = target;
        self
    }

    /// Whether the two players want different final values.
    ///
    /// With equal targets a final value matching neither target is possible,
    /// and is scored as a draw.
    #[must_use]
    pub fn has_opposed_targets(&self) -> bool {
        self.targets[Player::One] != self.targets[Player::Two]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_inputs, [false, true, false, true, false]);
        assert!(config.targets[Player::One]);
        assert!(!config.targets[Player::Two]);
        assert!(config.has_opposed_targets());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_inputs([true; INPUT_COUNT])
            .with_target(Player::Two, true);

        assert_eq!(config.initial_inputs, [true; 5]);
        assert!(config.targets[Player::Two]);
        assert!(!config.has_opposed_targets());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_target(Player::One, false);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
