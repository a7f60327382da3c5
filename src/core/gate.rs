//! Gate cards and the hands that hold them.
//!
//! Each player starts with exactly one card of each of the five gate kinds.
//! A `Hand` is a bit set over the kinds, so iteration order is always the
//! canonical kind order (AND, OR, NAND, NOR, XOR) regardless of what has
//! already been played.

use serde::{Deserialize, Serialize};

/// Number of distinct gate kinds.
pub const GATE_KIND_COUNT: usize = 5;

/// A two-input boolean gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GateKind {
    And,
    Or,
    Nand,
    Nor,
    Xor,
}

impl GateKind {
    /// All kinds in canonical (hand) order.
    pub const ALL: [GateKind; GATE_KIND_COUNT] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xor,
    ];

    /// Card id, 1-based; 0 is reserved for an empty slot.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8 + 1
    }

    /// Parse a card id.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        id.checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize).copied())
    }

    /// Display name as printed on the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
        }
    }

    /// Evaluate the gate.
    #[inline]
    #[must_use]
    pub const fn eval(self, a: bool, b: bool) -> bool {
        match self {
            GateKind::And => a && b,
            GateKind::Or => a || b,
            GateKind::Nand => !(a && b),
            GateKind::Nor => !(a || b),
            GateKind::Xor => a != b,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A player's remaining gate cards: at most one of each kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand(u8);

impl Hand {
    const FULL_MASK: u8 = (1 << GATE_KIND_COUNT) - 1;

    /// A hand holding one card of every kind.
    #[must_use]
    pub const fn full() -> Self {
        Self(Self::FULL_MASK)
    }

    /// A hand with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn contains(self, gate: GateKind) -> bool {
        self.0 & gate.bit() != 0
    }

    /// Remove a card. Returns false if it was not in the hand.
    pub fn remove(&mut self, gate: GateKind) -> bool {
        let present = self.contains(gate);
        self.0 &= !gate.bit();
        present
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cards in canonical order.
    pub fn iter(self) -> impl Iterator<Item = GateKind> {
        GateKind::ALL.into_iter().filter(move |g| self.contains(*g))
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::full()
    }
}

impl std::fmt::Debug for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_tables() {
        let cases = [(false, false), (false, true), (true, false), (true, true)];
        let expect = |g: GateKind| -> Vec<bool> { cases.iter().map(|&(a, b)| g.eval(a, b)).collect() };

        assert_eq!(expect(GateKind::And), vec![false, false, false, true]);
        assert_eq!(expect(GateKind::Or), vec![false, true, true, true]);
        assert_eq!(expect(GateKind::Nand), vec![true, true, true, false]);
        assert_eq!(expect(GateKind::Nor), vec![true, false, false, false]);
        assert_eq!(expect(GateKind::Xor), vec![false, true, true, false]);
    }

    #[test]
    fn test_gate_ids() {
        assert_eq!(GateKind::And.id(), 1);
        assert_eq!(GateKind::Xor.id(), 5);
        for gate in GateKind::ALL {
            assert_eq!(GateKind::from_id(gate.id()), Some(gate));
        }
        assert_eq!(GateKind::from_id(0), None);
        assert_eq!(GateKind::from_id(6), None);
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(GateKind::Nand.name(), "NAND");
        assert_eq!(format!("{}", GateKind::Nor), "NOR");
    }

    #[test]
    fn test_full_hand() {
        let hand = Hand::full();
        assert_eq!(hand.len(), 5);
        assert_eq!(hand.iter().collect::<Vec<_>>(), GateKind::ALL.to_vec());
    }

    #[test]
    fn test_hand_remove_once() {
        let mut hand = Hand::full();

        assert!(hand.remove(GateKind::Or));
        assert!(!hand.contains(GateKind::Or));
        assert_eq!(hand.len(), 4);

        // Second removal finds nothing
        assert!(!hand.remove(GateKind::Or));
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn test_hand_order_survives_removal() {
        let mut hand = Hand::full();
        hand.remove(GateKind::And);
        hand.remove(GateKind::Nor);

        assert_eq!(
            hand.iter().collect::<Vec<_>>(),
            vec![GateKind::Or, GateKind::Nand, GateKind::Xor]
        );
    }

    #[test]
    fn test_empty_hand() {
        let mut hand = Hand::full();
        for gate in GateKind::ALL {
            hand.remove(gate);
        }
        assert!(hand.is_empty());
        assert_eq!(hand, Hand::empty());
        assert_eq!(format!("{:?}", hand), "{}");
    }
}
