//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game is strictly two-player. Players carry the numeric ids `1` and `2`
//! used by the winner contract, where `0` means "no winner".
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `Player`. Backed by an array, so a
//! `PlayerMap<T: Copy>` is itself `Copy` and clones never share storage.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    One,
    /// Moves second.
    Two,
}

impl Player {
    /// Both players in seat order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Numeric id (1 or 2).
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Zero-based index for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Parse a numeric id. Anything other than 1 or 2 is `None`.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// Convert an optional winner into the numeric {0, 1, 2} contract.
#[must_use]
pub fn winner_id(winner: Option<Player>) -> u8 {
    winner.map_or(0, Player::id)
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gate_duel::core::{Player, PlayerMap};
///
/// let mut targets = PlayerMap::new(true, false);
/// assert!(targets[Player::One]);
///
/// targets[Player::Two] = true;
/// assert!(targets[Player::Two]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map from the two players' values.
    pub fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a map from a factory called once per player.
    pub fn from_fn(mut factory: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_ids() {
        assert_eq!(Player::One.id(), 1);
        assert_eq!(Player::Two.id(), 2);
        assert_eq!(Player::from_id(2), Some(Player::Two));
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Player::from_id(3), None);
        assert_eq!(format!("{}", Player::One), "Player 1");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_winner_id() {
        assert_eq!(winner_id(None), 0);
        assert_eq!(winner_id(Some(Player::One)), 1);
        assert_eq!(winner_id(Some(Player::Two)), 2);
    }

    #[test]
    fn test_player_map_from_fn() {
        let map = PlayerMap::from_fn(|p| p.id() * 10);

        assert_eq!(map[Player::One], 10);
        assert_eq!(map[Player::Two], 20);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map = PlayerMap::with_value(0);

        map[Player::One] = 5;
        map[Player::Two] = 7;

        assert_eq!(map[Player::One], 5);
        assert_eq!(map[Player::Two], 7);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::new('a', 'b');
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Player::One, &'a'), (Player::Two, &'b')]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::new(1u8, 0u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
