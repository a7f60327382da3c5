//! Fixed circuit topology.
//!
//! Four gate layers narrow five input wires down to one:
//!
//! ```text
//! layer 0: slots 0..=3  read (i, i+1) of wires 0..=4    -> wires 5..=8
//! layer 1: slots 4..=6  read adjacent pairs of 5..=8    -> wires 9..=11
//! layer 2: slots 7..=8  read adjacent pairs of 9..=11   -> wires 12..=13
//! layer 3: slot  9      reads 12 and 13                 -> wire 14
//! ```
//!
//! Every slot reads only wires produced by earlier layers, so the graph is
//! acyclic and a slot becomes playable exactly when its layer below is done.

use crate::core::{SIGNAL_COUNT, SLOT_COUNT};

/// Wires a slot reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotWiring {
    /// The two input wire indices.
    pub inputs: [usize; 2],
    /// The output wire index.
    pub output: usize,
}

impl SlotWiring {
    const fn new(a: usize, b: usize, output: usize) -> Self {
        Self {
            inputs: [a, b],
            output,
        }
    }
}

/// Wiring for every slot, indexed by slot.
pub const TOPOLOGY: [SlotWiring; SLOT_COUNT] = [
    SlotWiring::new(0, 1, 5),
    SlotWiring::new(1, 2, 6),
    SlotWiring::new(2, 3, 7),
    SlotWiring::new(3, 4, 8),
    SlotWiring::new(5, 6, 9),
    SlotWiring::new(6, 7, 10),
    SlotWiring::new(7, 8, 11),
    SlotWiring::new(9, 10, 12),
    SlotWiring::new(10, 11, 13),
    SlotWiring::new(12, 13, 14),
];

/// Wiring of one slot, or `None` if out of range.
#[inline]
#[must_use]
pub fn wiring(slot: usize) -> Option<&'static SlotWiring> {
    TOPOLOGY.get(slot)
}

const _: () = assert!(TOPOLOGY[SLOT_COUNT - 1].output == SIGNAL_COUNT - 1);
