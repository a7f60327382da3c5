//! MCTS node structure.
//!
//! Nodes live in the `MCTSTree` arena and refer to each other by `NodeId`.
//! A node owns its state snapshot; the parent link is a plain index, so the
//! tree has a single owner (the arena) and no reference cycles.

use smallvec::SmallVec;

use crate::core::{GameState, Move};
use crate::rules::MoveList;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree.
#[derive(Clone, Debug)]
pub struct MCTSNode {
    /// State reached at this node.
    pub state: GameState,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Move that led here from the parent (None for root).
    pub mv: Option<Move>,

    /// Expanded children, in expansion order.
    pub children: SmallVec<[NodeId; 8]>,

    /// Number of backpropagation passes through this node.
    pub visits: u32,

    /// Accumulated score from the searching player's perspective:
    /// 1 per win, 0.5 per draw.
    pub wins: f64,

    /// Legal moves not yet expanded into children.
    pub untried: MoveList,

    /// Depth in tree (root = 0).
    pub depth: u16,
}

impl MCTSNode {
    /// Create a node wrapping `state`. Untried moves are the state's legal moves.
    pub fn new(state: GameState, parent: NodeId, mv: Option<Move>, depth: u16) -> Self {
        let untried = state.valid_moves();
        Self {
            state,
            parent,
            mv,
            children: SmallVec::new(),
            visits: 0,
            wins: 0.0,
            untried,
            depth,
        }
    }

    /// Create a root node.
    pub fn root(state: GameState) -> Self {
        Self::new(state, NodeId::NONE, None, 0)
    }

    /// True when every legal move has been expanded into a child.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Average score per visit (0 if unvisited).
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f64
        }
    }

    /// Add one visit with the given score.
    pub fn record(&mut self, score: f64) {
        self.visits += 1;
        self.wins += score;
        debug_assert!(self.wins <= self.visits as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GateKind;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_root() {
        let node = MCTSNode::root(GameState::standard());

        assert!(node.parent.is_none());
        assert!(node.mv.is_none());
        assert_eq!(node.depth, 0);
        assert_eq!(node.visits, 0);
        assert_eq!(node.wins, 0.0);
        assert!(node.children.is_empty());
        assert_eq!(node.untried.len(), 20);
        assert!(!node.is_fully_expanded());
    }

    #[test]
    fn test_terminal_node_is_fully_expanded() {
        let mut state = GameState::standard();
        for slot in 0..10u8 {
            let mv = state.valid_moves().into_iter().find(|m| m.slot == slot).unwrap();
            state.apply_move(mv).unwrap();
        }
        let node = MCTSNode::new(state, NodeId::new(0), Some(Move::new(9, GateKind::And)), 10);

        assert!(node.untried.is_empty());
        assert!(node.is_fully_expanded());
    }

    #[test]
    fn test_win_rate() {
        let mut node = MCTSNode::root(GameState::standard());
        assert_eq!(node.win_rate(), 0.0);

        node.record(1.0);
        node.record(0.5);
        node.record(0.0);
        node.record(1.0);

        assert_eq!(node.visits, 4);
        assert_eq!(node.wins, 2.5);
        assert_eq!(node.win_rate(), 0.625);
    }
}
