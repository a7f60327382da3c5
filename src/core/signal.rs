//! Wire values.

use serde::{Deserialize, Serialize};

/// Value on one wire of the circuit.
///
/// A wire starts `Unset` (unless it is an input) and is written exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    #[default]
    Unset,
    False,
    True,
}

impl Signal {
    #[inline]
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Signal::Unset)
    }

    /// The boolean value, if resolved.
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<bool> {
        match self {
            Signal::Unset => None,
            Signal::False => Some(false),
            Signal::True => Some(true),
        }
    }
}

impl From<bool> for Signal {
    fn from(value: bool) -> Self {
        if value {
            Signal::True
        } else {
            Signal::False
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_values() {
        assert_eq!(Signal::default(), Signal::Unset);
        assert!(!Signal::Unset.is_set());
        assert_eq!(Signal::Unset.value(), None);
        assert_eq!(Signal::from(true), Signal::True);
        assert_eq!(Signal::from(false).value(), Some(false));
        assert!(Signal::False.is_set());
    }
}
